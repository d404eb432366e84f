//! Cloud layer meshes and the parametric surface builders behind them.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::subtype::{Axis, OrbitalSubtype};

/// One surface vertex of a cloud layer.
/// Wire format: 7 floats = 28 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CloudVertex {
    /// Position relative to the layer offset.
    pub position: [f32; 3],
    /// Ramp color.
    pub color: [f32; 3],
    /// Gain-scaled density in [0, 1] that picked the color.
    pub probability: f32,
}

impl CloudVertex {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// What a layer is, which decides how it animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Concentric s-orbital sphere.
    Shell,
    /// p-style lobe stretched along an axis.
    Lobe(Axis),
    /// d-orbital cloverleaf petal.
    Clover,
    /// z² ring.
    Torus,
}

impl LayerKind {
    /// Numeric code for the layer table.
    pub fn code(self) -> u32 {
        match self {
            LayerKind::Shell => 0,
            LayerKind::Lobe(Axis::X) => 1,
            LayerKind::Lobe(Axis::Y) => 2,
            LayerKind::Lobe(Axis::Z) => 3,
            LayerKind::Clover => 4,
            LayerKind::Torus => 5,
        }
    }
}

/// One translucent surface of a fog cloud.
#[derive(Debug, Clone)]
pub struct CloudLayer {
    pub kind: LayerKind,
    /// Position within its group, `0..count`.
    pub index: u32,
    /// Layers in the group this one belongs to.
    pub count: u32,
    pub base_opacity: f32,
    /// Animation phase offset in radians.
    pub phase: f32,
    /// Translation applied to every vertex at render time.
    pub offset: Vec3,
    pub vertices: Vec<CloudVertex>,
    pub indices: Vec<u32>,
}

/// Every layer generated for one orbital.
#[derive(Debug, Clone)]
pub struct OrbitalCloud {
    pub subtype: OrbitalSubtype,
    pub n: u8,
    /// Shell radius the shape was scaled from.
    pub radius: f32,
    pub layers: Vec<CloudLayer>,
}

impl OrbitalCloud {
    pub fn vertex_count(&self) -> usize {
        self.layers.iter().map(|l| l.vertices.len()).sum()
    }

    pub fn index_count(&self) -> usize {
        self.layers.iter().map(|l| l.indices.len()).sum()
    }
}

/// Surface vertices and triangle indices.
pub type Surface = (Vec<CloudVertex>, Vec<u32>);

/// Sample a `(rows + 1) × (cols + 1)` grid over `(u, v) ∈ [0,1]²`.
///
/// `point` maps grid coordinates to a local position; `shade` maps the
/// position to a color and probability. Two triangles per quad.
pub fn parametric_grid(
    rows: u32,
    cols: u32,
    point: impl Fn(f32, f32) -> Vec3,
    shade: impl Fn(Vec3) -> ([f32; 3], f32),
) -> Surface {
    let mut vertices = Vec::with_capacity(((rows + 1) * (cols + 1)) as usize);
    for i in 0..=rows {
        let u = i as f32 / rows as f32;
        for j in 0..=cols {
            let v = j as f32 / cols as f32;
            let p = point(u, v);
            let (color, probability) = shade(p);
            vertices.push(CloudVertex {
                position: p.to_array(),
                color,
                probability,
            });
        }
    }

    let mut indices = Vec::with_capacity((rows * cols * 6) as usize);
    for i in 0..rows {
        for j in 0..cols {
            let a = i * (cols + 1) + j;
            let b = a + cols + 1;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    (vertices, indices)
}

/// UV sphere centred on the origin.
pub fn uv_sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    shade: impl Fn(Vec3) -> ([f32; 3], f32),
) -> Surface {
    parametric_grid(
        height_segments,
        width_segments,
        |u, v| {
            let theta = u * PI;
            let phi = v * TAU;
            Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            )
        },
        shade,
    )
}

/// Torus in the xy plane around the z axis.
pub fn torus(
    major: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
    shade: impl Fn(Vec3) -> ([f32; 3], f32),
) -> Surface {
    parametric_grid(
        radial_segments,
        tubular_segments,
        |a, b| {
            let v = a * TAU;
            let u = b * TAU;
            let ring = major + tube * v.cos();
            Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin())
        },
        shade,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(_: Vec3) -> ([f32; 3], f32) {
        ([0.0, 0.0, 0.5], 0.0)
    }

    #[test]
    fn vertex_is_seven_floats() {
        assert_eq!(std::mem::size_of::<CloudVertex>(), CloudVertex::STRIDE_BYTES);
    }

    #[test]
    fn grid_counts_and_index_bounds() {
        let (vertices, indices) = parametric_grid(4, 6, |u, v| Vec3::new(u, v, 0.0), flat);
        assert_eq!(vertices.len(), 5 * 7);
        assert_eq!(indices.len(), 4 * 6 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn sphere_points_lie_on_radius() {
        let (vertices, _) = uv_sphere(2.5, 32, 32, flat);
        assert_eq!(vertices.len(), 33 * 33);
        for v in &vertices {
            let r = Vec3::from_array(v.position).length();
            assert!((r - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn torus_points_stay_within_tube() {
        let (vertices, indices) = torus(1.0, 0.2, 16, 32, flat);
        assert_eq!(vertices.len(), 17 * 33);
        assert_eq!(indices.len(), 16 * 32 * 6);
        for v in &vertices {
            let p = Vec3::from_array(v.position);
            let ring = (p.x * p.x + p.y * p.y).sqrt();
            let d = ((ring - 1.0).powi(2) + p.z * p.z).sqrt();
            assert!((d - 0.2).abs() < 1e-4);
        }
    }

    #[test]
    fn layer_kind_codes_are_distinct() {
        let kinds = [
            LayerKind::Shell,
            LayerKind::Lobe(Axis::X),
            LayerKind::Lobe(Axis::Y),
            LayerKind::Lobe(Axis::Z),
            LayerKind::Clover,
            LayerKind::Torus,
        ];
        let codes: Vec<u32> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }
}
