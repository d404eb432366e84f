//! Cosmetic per-layer fog motion as a pure function of elapsed time.

use glam::Vec3;

use crate::geometry::mesh::{CloudLayer, LayerKind};
use crate::geometry::subtype::Axis;

/// Animation time units per display frame the rotation rates are tuned for.
const FRAME_TIME: f32 = 0.01;

/// The inputs one layer needs to animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerAnimation {
    pub kind: LayerKind,
    pub index: u32,
    pub base_opacity: f32,
    pub phase: f32,
}

impl From<&CloudLayer> for LayerAnimation {
    fn from(layer: &CloudLayer) -> Self {
        Self {
            kind: layer.kind,
            index: layer.index,
            base_opacity: layer.base_opacity,
            phase: layer.phase,
        }
    }
}

/// Per-frame perturbation applied on top of a layer's static mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub scale: Vec3,
    pub opacity: f32,
    /// Euler angles (x, y, z) in radians.
    pub rotation: Vec3,
}

impl LayerTransform {
    pub const FLOATS: usize = 7;

    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        [
            self.scale.x,
            self.scale.y,
            self.scale.z,
            self.opacity,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ]
    }
}

/// Rotation accumulated from time 0 by a per-frame step of
/// `rate · sin(freq · t + shift)`.
fn swept_sin(rate: f32, freq: f32, shift: f32, phase: f32, elapsed: f32) -> f32 {
    let k = rate / FRAME_TIME;
    k * ((freq * phase + shift).cos() - (freq * (elapsed + phase) + shift).cos()) / freq
}

/// As `swept_sin` for a cosine step.
fn swept_cos(rate: f32, freq: f32, shift: f32, phase: f32, elapsed: f32) -> f32 {
    let k = rate / FRAME_TIME;
    k * ((freq * (elapsed + phase) + shift).sin() - (freq * phase + shift).sin()) / freq
}

fn rotation(layer: &LayerAnimation, elapsed: f32) -> Vec3 {
    let i = layer.index as f32;
    let phase = layer.phase;

    match layer.kind {
        LayerKind::Lobe(axis) => {
            let rate = 0.01 + 0.005 * i;
            let a = swept_sin(rate, 0.3, 0.0, phase, elapsed);
            let b = swept_cos(rate, 0.4, 0.0, phase, elapsed);
            match axis {
                Axis::X => Vec3::new(0.0, a, b),
                Axis::Y => Vec3::new(a, 0.0, b),
                Axis::Z => Vec3::new(a, b, 0.0),
            }
        }
        LayerKind::Shell | LayerKind::Clover => Vec3::new(
            swept_sin(0.002, 0.2, 0.1 * i, phase, elapsed),
            swept_cos(0.002, 0.25, 0.15 * i, phase, elapsed),
            swept_sin(0.001, 0.3, 0.2 * i, phase, elapsed),
        ),
        LayerKind::Torus => Vec3::ZERO,
    }
}

/// Transform for `layer` at `elapsed` animation time.
///
/// Scale pulses around 1 with a small per-axis wobble. Opacity oscillates
/// below the layer's base opacity. Rotation is zero at `elapsed = 0` and
/// stays bounded for all time.
pub fn animate_layer(layer: &LayerAnimation, elapsed: f32) -> LayerTransform {
    let t = elapsed + layer.phase;
    let i = layer.index as f32;

    let pulse = 1.0
        + (t * 0.4 + i * 0.5).sin() * 0.08
        + (t * 0.7 + i * 0.3).sin() * 0.05
        + (t * 0.3 + i * 0.7).cos() * 0.03;
    let wobble = Vec3::new(
        (t * 0.5 + i * 0.4).sin() * 0.02,
        (t * 0.6 + i * 0.5).cos() * 0.02,
        (t * 0.4 + i * 0.6).sin() * 0.02,
    );

    let opacity = match layer.kind {
        LayerKind::Torus => {
            layer.base_opacity * (0.7 + (t * 0.4).sin() * 0.15 + (t * 0.6).cos() * 0.1)
        }
        _ => {
            layer.base_opacity
                * (0.5 + (t * 0.4 + i * 0.2).sin() * 0.1 + (t * 0.6 + i * 0.3).cos() * 0.05)
        }
    };

    LayerTransform {
        scale: Vec3::splat(pulse) + wobble,
        opacity,
        rotation: rotation(layer, elapsed),
    }
}
