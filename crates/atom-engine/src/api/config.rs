//! Viewer configuration. Every field has a default, so a JSON override only
//! needs the keys it changes.

use serde::Deserialize;

/// Upper bound on any mesh segment count.
pub const MAX_SEGMENTS: u32 = 32;
/// Upper bound on any per-shape layer count.
///
/// With both caps, oganesson's 2310 layers of at most 32×32 quads come to
/// about 14.2M indices, below the 2^24 limit where f32 layer offsets stop
/// being exact.
pub const MAX_LAYERS: u32 = 10;

/// Mesh resolution and layer counts for the fog clouds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Concentric spheres per s orbital (default: 8).
    pub s_layers: u32,
    /// Width and height segments of each s sphere (default: 32).
    pub s_segments: u32,
    /// Layers per p-style lobe (default: 6).
    pub p_layers: u32,
    /// Grid resolution of a p-style lobe (default: 24).
    pub p_segments: u32,
    /// Layers per cloverleaf petal (default: 5).
    pub d_layers: u32,
    /// Grid resolution of a cloverleaf petal (default: 20).
    pub d_segments: u32,
    /// Torus layers of a z² orbital (default: 4).
    pub torus_layers: u32,
    /// Segments around the torus tube (default: 16).
    pub torus_radial_segments: u32,
    /// Segments around the torus ring (default: 32).
    pub torus_tubular_segments: u32,
    /// Mixed into every shape seed; change it to reshuffle layer phases.
    pub phase_seed: u64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            s_layers: 8,
            s_segments: 32,
            p_layers: 6,
            p_segments: 24,
            d_layers: 5,
            d_segments: 20,
            torus_layers: 4,
            torus_radial_segments: 16,
            torus_tubular_segments: 32,
            phase_seed: 0,
        }
    }
}

impl GeometryConfig {
    /// Clamp layer counts into `1..=MAX_LAYERS` and segment counts into
    /// `1..=MAX_SEGMENTS`. Zero would divide by zero in the builders; large
    /// values would overflow the exact range of the f32 layer table.
    pub fn sanitized(&self) -> Self {
        let layers = |v: u32| v.clamp(1, MAX_LAYERS);
        let segments = |v: u32| v.clamp(1, MAX_SEGMENTS);
        Self {
            s_layers: layers(self.s_layers),
            s_segments: segments(self.s_segments),
            p_layers: layers(self.p_layers),
            p_segments: segments(self.p_segments),
            d_layers: layers(self.d_layers),
            d_segments: segments(self.d_segments),
            torus_layers: layers(self.torus_layers),
            torus_radial_segments: segments(self.torus_radial_segments),
            torus_tubular_segments: segments(self.torus_tubular_segments),
            phase_seed: self.phase_seed,
        }
    }
}

/// Clock and drag behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animation time added per frame (default: 0.01).
    pub time_step: f32,
    /// Pointer pixels to angular velocity (default: 0.01).
    pub drag_sensitivity: f32,
    /// Angular velocity kept per frame (default: 0.95).
    pub damping: f32,
    /// Tile glow fade duration in milliseconds (default: 300).
    pub glow_fade_ms: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            drag_sensitivity: 0.01,
            damping: 0.95,
            glow_fade_ms: 300.0,
        }
    }
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Element shown at startup (default: 1, hydrogen).
    pub initial_element: u32,
    pub geometry: GeometryConfig,
    pub animation: AnimationConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_element: 1,
            geometry: GeometryConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse from a JSON string. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "initial_element": 26,
            "geometry": { "p_segments": 12 },
            "animation": { "damping": 0.9 }
        }"#;
        let config = ViewerConfig::from_json(json).unwrap();
        assert_eq!(config.initial_element, 26);
        assert_eq!(config.geometry.p_segments, 12);
        assert_eq!(config.geometry.s_layers, 8);
        assert_eq!(config.animation.damping, 0.9);
        assert_eq!(config.animation.time_step, 0.01);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn sanitized_lifts_zero_counts() {
        let config = GeometryConfig {
            d_layers: 0,
            ..GeometryConfig::default()
        };
        assert_eq!(config.sanitized().d_layers, 1);
        assert_eq!(config.sanitized().p_layers, 6);
    }

    #[test]
    fn sanitized_caps_oversized_counts() {
        let config = ViewerConfig::from_json(
            r#"{ "geometry": { "s_segments": 100000, "p_layers": 500, "torus_tubular_segments": 64 } }"#,
        )
        .unwrap();
        let geometry = config.geometry.sanitized();
        assert_eq!(geometry.s_segments, MAX_SEGMENTS);
        assert_eq!(geometry.p_layers, MAX_LAYERS);
        assert_eq!(geometry.torus_tubular_segments, MAX_SEGMENTS);
        // defaults already sit inside the caps
        assert_eq!(GeometryConfig::default().sanitized(), GeometryConfig::default());
    }
}
