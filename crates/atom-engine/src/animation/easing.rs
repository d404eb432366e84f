// animation/easing.rs
//
// Easing for UI fades. Pure math.

/// Cubic ease-out on a normalized `t`, clamped to [0, 1].
#[inline]
pub fn cubic_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate from `a` to `b` along the cubic ease-out.
#[inline]
pub fn ease_out(a: f32, b: f32, t: f32) -> f32 {
    lerp(a, b, cubic_out(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert!(cubic_out(0.0).abs() < 1e-6);
        assert!((cubic_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn front_loads() {
        assert!((cubic_out(0.5) - 0.875).abs() < 1e-6);
        assert!(cubic_out(0.2) > 0.2);
    }

    #[test]
    fn clamps_input() {
        assert_eq!(cubic_out(-1.0), 0.0);
        assert_eq!(cubic_out(2.0), 1.0);
    }

    #[test]
    fn ease_out_interpolates_downwards() {
        assert!(ease_out(0.5, 0.0, 1.0).abs() < 1e-6);
        assert!((ease_out(0.0, 10.0, 0.5) - 8.75).abs() < 1e-5);
    }
}
