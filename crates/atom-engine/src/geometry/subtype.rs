//! Orbital shape variants.

use glam::Vec3;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// p-orbital order within a subshell.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Which end of an axis a lobe sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Positive,
    Negative,
}

impl Side {
    pub fn sign(self) -> f32 {
        match self {
            Side::Positive => 1.0,
            Side::Negative => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DSubtype {
    #[serde(rename = "xy")]
    Xy,
    #[serde(rename = "xz")]
    Xz,
    #[serde(rename = "yz")]
    Yz,
    #[serde(rename = "x2-y2")]
    X2MinusY2,
    #[serde(rename = "z2")]
    Z2,
}

impl DSubtype {
    /// d-orbital order within a subshell.
    pub const ALL: [DSubtype; 5] = [
        DSubtype::Xy,
        DSubtype::Xz,
        DSubtype::Yz,
        DSubtype::X2MinusY2,
        DSubtype::Z2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DSubtype::Xy => "xy",
            DSubtype::Xz => "xz",
            DSubtype::Yz => "yz",
            DSubtype::X2MinusY2 => "x²-y²",
            DSubtype::Z2 => "z²",
        }
    }

    /// In-plane axes `(u, v)` and the flattened normal for cloverleaf
    /// subtypes. `None` for x²-y² and z², which are built from p-lobes.
    pub fn clover_frame(self) -> Option<(Axis, Axis, Axis)> {
        match self {
            DSubtype::Xy => Some((Axis::X, Axis::Y, Axis::Z)),
            DSubtype::Xz => Some((Axis::X, Axis::Z, Axis::Y)),
            DSubtype::Yz => Some((Axis::Y, Axis::Z, Axis::X)),
            DSubtype::X2MinusY2 | DSubtype::Z2 => None,
        }
    }
}

/// One lobe of the stylized f set: where it sits and which p-lobe it reuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FLobe {
    /// Placement direction, multiplied by the lobe distance.
    pub direction: Vec3,
    pub axis: Axis,
    pub side: Side,
}

/// Fixed approximate directions, not spherical harmonics. The last two lobes
/// sit on the xy diagonals but keep x-axis lobes.
pub const F_LOBES: [FLobe; 8] = [
    FLobe { direction: Vec3::new(1.0, 0.0, 0.0), axis: Axis::X, side: Side::Positive },
    FLobe { direction: Vec3::new(-1.0, 0.0, 0.0), axis: Axis::X, side: Side::Negative },
    FLobe { direction: Vec3::new(0.0, 1.0, 0.0), axis: Axis::Y, side: Side::Positive },
    FLobe { direction: Vec3::new(0.0, -1.0, 0.0), axis: Axis::Y, side: Side::Negative },
    FLobe { direction: Vec3::new(0.0, 0.0, 1.0), axis: Axis::Z, side: Side::Positive },
    FLobe { direction: Vec3::new(0.0, 0.0, -1.0), axis: Axis::Z, side: Side::Negative },
    FLobe { direction: Vec3::new(0.7, 0.7, 0.0), axis: Axis::X, side: Side::Positive },
    FLobe { direction: Vec3::new(-0.7, -0.7, 0.0), axis: Axis::X, side: Side::Negative },
];

/// An f orbital. Every f orbital renders the same eight-lobe set; the index
/// only keeps clouds of one subshell distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FLobeSet {
    pub orbital_index: u8,
}

/// Shape to generate for one orbital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "variant", rename_all = "lowercase")]
pub enum OrbitalSubtype {
    S,
    P(Axis),
    D(DSubtype),
    F(FLobeSet),
}

impl OrbitalSubtype {
    pub fn l(&self) -> u8 {
        match self {
            OrbitalSubtype::S => 0,
            OrbitalSubtype::P(_) => 1,
            OrbitalSubtype::D(_) => 2,
            OrbitalSubtype::F(_) => 3,
        }
    }

    /// `"s"`, `"p_x"`, `"d_x²-y²"`, `"f_3"`.
    pub fn label(&self) -> String {
        match self {
            OrbitalSubtype::S => "s".to_string(),
            OrbitalSubtype::P(axis) => format!("p_{}", axis.name()),
            OrbitalSubtype::D(d) => format!("d_{}", d.name()),
            OrbitalSubtype::F(set) => format!("f_{}", set.orbital_index),
        }
    }

    /// Subtype of slot `index` in a subshell of azimuthal number `l`.
    /// `None` for `l >= 4` or an index past the slot count.
    pub fn for_slot(l: u8, index: u8) -> Option<Self> {
        match l {
            0 if index == 0 => Some(OrbitalSubtype::S),
            1 => Axis::ALL.get(index as usize).map(|&a| OrbitalSubtype::P(a)),
            2 => DSubtype::ALL.get(index as usize).map(|&d| OrbitalSubtype::D(d)),
            3 if index < 7 => Some(OrbitalSubtype::F(FLobeSet { orbital_index: index })),
            _ => None,
        }
    }

    /// Small integer tag used to seed layer phases.
    pub fn seed_tag(&self) -> u32 {
        match self {
            OrbitalSubtype::S => 0,
            OrbitalSubtype::P(axis) => 10 + *axis as u32,
            OrbitalSubtype::D(d) => 20 + *d as u32,
            OrbitalSubtype::F(set) => 30 + set.orbital_index as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_to_subtypes_in_order() {
        assert_eq!(OrbitalSubtype::for_slot(0, 0), Some(OrbitalSubtype::S));
        assert_eq!(OrbitalSubtype::for_slot(1, 2), Some(OrbitalSubtype::P(Axis::Z)));
        assert_eq!(
            OrbitalSubtype::for_slot(2, 3),
            Some(OrbitalSubtype::D(DSubtype::X2MinusY2))
        );
        assert_eq!(OrbitalSubtype::for_slot(2, 5), None);
        assert_eq!(OrbitalSubtype::for_slot(3, 6).map(|s| s.l()), Some(3));
        assert_eq!(OrbitalSubtype::for_slot(4, 0), None);
    }

    #[test]
    fn labels() {
        assert_eq!(OrbitalSubtype::P(Axis::Y).label(), "p_y");
        assert_eq!(OrbitalSubtype::D(DSubtype::Z2).label(), "d_z²");
        assert_eq!(OrbitalSubtype::F(FLobeSet { orbital_index: 2 }).label(), "f_2");
    }

    #[test]
    fn clover_frames_exclude_axial_d() {
        assert!(DSubtype::Xz.clover_frame().is_some());
        assert!(DSubtype::X2MinusY2.clover_frame().is_none());
        assert!(DSubtype::Z2.clover_frame().is_none());
    }

    #[test]
    fn eight_f_lobes_with_diagonals() {
        assert_eq!(F_LOBES.len(), 8);
        assert_eq!(F_LOBES[6].direction, Vec3::new(0.7, 0.7, 0.0));
        assert_eq!(F_LOBES[7].side, Side::Negative);
    }
}
