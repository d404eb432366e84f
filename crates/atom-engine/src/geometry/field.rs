//! Stylized probability-density fields.
//!
//! These drive vertex coloring only. They are shaped to look right, not to
//! match real hydrogen wavefunctions.

use glam::Vec3;

use super::subtype::{Axis, DSubtype};

/// Keeps the angular terms finite at the origin.
pub const EPSILON: f32 = 0.01;

/// Radius normalized by `2n`.
fn normalized_radius(r: f32, n: u8) -> f32 {
    r / (2.0 * n.max(1) as f32)
}

/// `exp(-(r/2n)²) · (1 - r/2n)`.
pub fn s_density(r: f32, n: u8) -> f32 {
    let nr = normalized_radius(r, n);
    (-nr * nr).exp() * (1.0 - nr)
}

/// `exp(-(r/2n)²) · a² / (r² + ε)` for axis coordinate `a`.
pub fn p_density(pos: Vec3, axis: Axis, n: u8) -> f32 {
    let r2 = pos.length_squared();
    let nr = normalized_radius(r2.sqrt(), n);
    let a = axis.component(pos);
    (-nr * nr).exp() * (a * a / (r2 + EPSILON))
}

/// Radial envelope times the subtype's angular term, never negative.
pub fn d_density(pos: Vec3, subtype: DSubtype, n: u8) -> f32 {
    let Vec3 { x, y, z } = pos;
    let r2 = pos.length_squared();
    let nr = normalized_radius(r2.sqrt(), n);
    let radial = (-nr * nr).exp();

    let angular = match subtype {
        DSubtype::Xy => (x * y).powi(2) / (r2 * r2 + EPSILON),
        DSubtype::Xz => (x * z).powi(2) / (r2 * r2 + EPSILON),
        DSubtype::Yz => (y * z).powi(2) / (r2 * r2 + EPSILON),
        DSubtype::X2MinusY2 => ((x * x - y * y) / (r2 + EPSILON)).powi(2),
        DSubtype::Z2 => ((3.0 * z * z - r2) / (r2 + EPSILON)).powi(2),
    };

    radial * angular.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_is_one_at_origin_and_falls_off() {
        assert!((s_density(0.0, 1) - 1.0).abs() < 1e-6);
        assert!(s_density(1.0, 1) < s_density(0.5, 1));
        // zero exactly at r = 2n
        assert!(s_density(4.0, 2).abs() < 1e-6);
    }

    #[test]
    fn p_peaks_on_its_axis() {
        let on = p_density(Vec3::new(1.0, 0.0, 0.0), Axis::X, 2);
        let off = p_density(Vec3::new(0.0, 1.0, 0.0), Axis::X, 2);
        assert!(on > 0.9 * (-(0.25f32).powi(2)).exp());
        assert_eq!(off, 0.0);
        assert!(p_density(Vec3::ZERO, Axis::Z, 2).abs() < 1e-6);
    }

    #[test]
    fn d_angular_terms() {
        let diag = Vec3::new(1.0, 1.0, 0.0);
        let axis = Vec3::new(1.0, 0.0, 0.0);
        assert!(d_density(diag, DSubtype::Xy, 3) > d_density(axis, DSubtype::Xy, 3));
        assert!(d_density(axis, DSubtype::X2MinusY2, 3) > d_density(diag, DSubtype::X2MinusY2, 3));
        let pole = Vec3::new(0.0, 0.0, 1.0);
        assert!(d_density(pole, DSubtype::Z2, 3) > d_density(axis, DSubtype::Z2, 3));
        assert!(d_density(Vec3::ZERO, DSubtype::Yz, 3).is_finite());
    }

    #[test]
    fn fields_are_non_negative() {
        for i in 0..50 {
            let t = i as f32 * 0.37;
            let p = Vec3::new(t.sin() * 3.0, t.cos() * 2.0, (t * 0.5).sin());
            assert!(p_density(p, Axis::Y, 2) >= 0.0);
            for sub in DSubtype::ALL {
                assert!(d_density(p, sub, 3) >= 0.0);
            }
        }
    }
}
