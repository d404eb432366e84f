use serde::Serialize;

/// Linear RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Channels as 0..=255 bytes (rounded).
    pub fn to_bytes(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// `#rrggbb` form for CSS.
    pub fn to_css_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Text color for a tile: every channel lightened by +100 (0..255 scale),
/// clamped to 255, emitted as a CSS `rgb()` string.
pub fn contrast_color(color: Rgb) -> String {
    let lift = |c: u8| (c as u32 + 100).min(255);
    let [r, g, b] = color.to_bytes();
    format!("rgb({}, {}, {})", lift(r), lift(g), lift(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Rgb::from_hex(0x4a90e2);
        assert_eq!(c.to_css_hex(), "#4a90e2");
    }

    #[test]
    fn contrast_lifts_and_clamps() {
        // 0x4a = 74 -> 174, 0x90 = 144 -> 244, 0xe2 = 226 -> 255
        assert_eq!(contrast_color(Rgb::from_hex(0x4a90e2)), "rgb(174, 244, 255)");
        assert_eq!(contrast_color(Rgb::new(1.0, 1.0, 1.0)), "rgb(255, 255, 255)");
        assert_eq!(contrast_color(Rgb::new(0.0, 0.0, 0.0)), "rgb(100, 100, 100)");
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(0.0, 0.0, 0.5);
        let b = Rgb::new(0.0, 1.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
