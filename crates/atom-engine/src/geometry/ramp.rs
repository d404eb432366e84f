//! Three-stop probability color ramp: dark blue, cyan, yellow.

use crate::color::Rgb;

pub const DARK_BLUE: Rgb = Rgb::new(0.0, 0.0, 0.5);
pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);
pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);

/// Upper edge of the flat dark-blue bucket.
pub const LOW_EDGE: f32 = 0.3;
/// Where the ramp reaches pure cyan.
pub const MID_EDGE: f32 = 0.6;

/// Map a normalized probability to a color.
///
/// `p` is clamped to [0, 1]. Below 0.3 the color is flat dark blue, then it
/// blends linearly to cyan at 0.6 and to yellow at 1.0. The ramp has no jumps.
/// NaN maps to dark blue.
pub fn ramp_color(p: f32) -> Rgb {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    if p < LOW_EDGE {
        DARK_BLUE
    } else if p < MID_EDGE {
        DARK_BLUE.lerp(CYAN, (p - LOW_EDGE) / (MID_EDGE - LOW_EDGE))
    } else {
        CYAN.lerp(YELLOW, (p - MID_EDGE) / (1.0 - MID_EDGE))
    }
}

/// Scale a raw field value by `gain`, clamp and color it.
pub fn shade(raw: f32, gain: f32) -> ([f32; 3], f32) {
    let p = (raw * gain).clamp(0.0, 1.0);
    (ramp_color(p).to_array(), p)
}
