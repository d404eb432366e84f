//! The one lobe builder every non-spherical orbital is assembled from.
//!
//! A lobe is a stack of nested parametric surfaces. Two profiles exist:
//! the p-style dumbbell half and the d-style cloverleaf petal. Callers pick
//! the profile, the probability field that colors it, and where the whole
//! stack is translated.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::mesh::{parametric_grid, CloudLayer, LayerKind};
use super::ramp::shade;
use super::rng::Rng;
use super::subtype::{Axis, Side};

/// Surface family of a lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LobeProfile {
    /// Half of a p dumbbell, pushed `0.7 · radius` toward `side` of `axis`.
    Dumbbell { axis: Axis, side: Side },
    /// Cloverleaf petal spanning the `u`/`v` plane, squashed along `normal`.
    Clover {
        u: Axis,
        v: Axis,
        normal: Axis,
        angle: f32,
    },
}

impl LobeProfile {
    fn kind(&self) -> LayerKind {
        match self {
            LobeProfile::Dumbbell { axis, .. } => LayerKind::Lobe(*axis),
            LobeProfile::Clover { .. } => LayerKind::Clover,
        }
    }

    /// Inner layer radius as a fraction of the lobe radius.
    fn inner_fraction(&self) -> f32 {
        match self {
            LobeProfile::Dumbbell { .. } => 0.4,
            LobeProfile::Clover { .. } => 0.5,
        }
    }

    /// Opacity of layer `i` of `count`.
    fn opacity(&self, i: u32, count: u32) -> f32 {
        let t = i as f32 / count as f32;
        match self {
            LobeProfile::Dumbbell { .. } => 0.05 + 0.03 * t,
            LobeProfile::Clover { .. } => 0.04 + 0.03 * t,
        }
    }

    /// Surface point for grid coordinates `(s, t)` at layer radius `lr`.
    fn point(&self, lr: f32, radius: f32, s: f32, t: f32) -> Vec3 {
        match *self {
            LobeProfile::Dumbbell { axis, side } => {
                let theta = s * PI;
                let phi = t * TAU;
                let st = theta.sin();
                let r = lr * st * st * (0.7 + 0.3 * st);
                let base = Vec3::new(r * phi.cos() * st, r * phi.sin() * st, r * theta.cos());
                base + axis.unit() * (0.7 * radius * side.sign())
            }
            LobeProfile::Clover {
                u,
                v,
                normal,
                angle,
            } => {
                let theta = s * PI;
                let phi = t * TAU;
                let st = theta.sin();
                let angular = st * st * (2.0 * phi + angle).cos();
                let radial = st * (0.5 + 0.5 * st);
                let r = lr * angular.abs() * radial;
                u.unit() * (r * (phi + angle).cos() * st)
                    + v.unit() * (r * (phi + angle).sin() * st)
                    + normal.unit() * (r * theta.cos() * 0.2)
            }
        }
    }
}

/// Everything needed to build one lobe.
#[derive(Debug, Clone, Copy)]
pub struct LobeSpec {
    pub profile: LobeProfile,
    /// Outer layer radius.
    pub radius: f32,
    pub layers: u32,
    /// Grid resolution in both directions.
    pub segments: u32,
    /// Multiplier applied to the field before coloring.
    pub gain: f32,
    /// Translation of the whole lobe.
    pub translation: Vec3,
}

/// Build the layers of one lobe, colored by `field` evaluated at each
/// untranslated vertex.
pub fn build_lobe(spec: &LobeSpec, field: impl Fn(Vec3) -> f32, rng: &mut Rng) -> Vec<CloudLayer> {
    let profile = spec.profile;
    let inner = profile.inner_fraction();

    (0..spec.layers)
        .map(|i| {
            let frac = i as f32 / spec.layers as f32;
            let layer_radius = spec.radius * (inner + (1.0 - inner) * frac);
            let (vertices, indices) = parametric_grid(
                spec.segments,
                spec.segments,
                |u, v| profile.point(layer_radius, spec.radius, u, v),
                |p| shade(field(p), spec.gain),
            );
            CloudLayer {
                kind: profile.kind(),
                index: i,
                count: spec.layers,
                base_opacity: profile.opacity(i, spec.layers),
                phase: rng.next_phase(),
                offset: spec.translation,
                vertices,
                indices,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dumbbell(axis: Axis, side: Side) -> LobeSpec {
        LobeSpec {
            profile: LobeProfile::Dumbbell { axis, side },
            radius: 2.0,
            layers: 6,
            segments: 24,
            gain: 4.0,
            translation: Vec3::ZERO,
        }
    }

    #[test]
    fn dumbbell_layers_and_opacity() {
        let layers = build_lobe(&dumbbell(Axis::X, Side::Positive), |_| 0.0, &mut Rng::new(1));
        assert_eq!(layers.len(), 6);
        for (i, layer) in layers.iter().enumerate() {
            assert_eq!(layer.index, i as u32);
            assert_eq!(layer.count, 6);
            assert_eq!(layer.vertices.len(), 25 * 25);
            let expected = 0.05 + 0.03 * i as f32 / 6.0;
            assert!((layer.base_opacity - expected).abs() < 1e-6);
            assert_eq!(layer.kind, LayerKind::Lobe(Axis::X));
        }
    }

    #[test]
    fn dumbbell_sits_on_its_side() {
        for side in [Side::Positive, Side::Negative] {
            let layers = build_lobe(&dumbbell(Axis::Y, side), |_| 0.0, &mut Rng::new(1));
            let outer = layers.last().unwrap();
            let mean_y: f32 = outer.vertices.iter().map(|v| v.position[1]).sum::<f32>()
                / outer.vertices.len() as f32;
            assert!(mean_y * side.sign() > 1.0);
        }
    }

    #[test]
    fn clover_is_flattened_on_normal() {
        let spec = LobeSpec {
            profile: LobeProfile::Clover {
                u: Axis::X,
                v: Axis::Y,
                normal: Axis::Z,
                angle: 0.0,
            },
            radius: 3.0,
            layers: 5,
            segments: 20,
            gain: 2.0,
            translation: Vec3::ZERO,
        };
        let layers = build_lobe(&spec, |_| 0.0, &mut Rng::new(3));
        assert_eq!(layers.len(), 5);
        let outer = layers.last().unwrap();
        let max_z = outer.vertices.iter().map(|v| v.position[2].abs()).fold(0.0, f32::max);
        let max_xy = outer
            .vertices
            .iter()
            .map(|v| v.position[0].hypot(v.position[1]))
            .fold(0.0, f32::max);
        assert!(max_z < 0.3 * max_xy);
        assert!((layers[0].base_opacity - 0.04).abs() < 1e-6);
    }

    #[test]
    fn colors_come_from_field() {
        let layers = build_lobe(&dumbbell(Axis::Z, Side::Positive), |_| 0.25, &mut Rng::new(5));
        for v in &layers[0].vertices {
            assert_eq!(v.probability, 1.0);
            assert_eq!(v.color, [1.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn phases_are_reproducible() {
        let a = build_lobe(&dumbbell(Axis::X, Side::Negative), |_| 0.0, &mut Rng::new(9));
        let b = build_lobe(&dumbbell(Axis::X, Side::Negative), |_| 0.0, &mut Rng::new(9));
        let pa: Vec<f32> = a.iter().map(|l| l.phase).collect();
        let pb: Vec<f32> = b.iter().map(|l| l.phase).collect();
        assert_eq!(pa, pb);
    }
}
