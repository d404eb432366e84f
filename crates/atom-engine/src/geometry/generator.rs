//! Orbital fog-cloud generation.
//!
//! Every shape is a pure function of its subtype, shell number and
//! configuration. Phases come from a seeded generator, so two calls with the
//! same inputs return identical clouds.

use glam::Vec3;

use super::field::{d_density, p_density, s_density};
use super::lobe::{build_lobe, LobeProfile, LobeSpec};
use super::mesh::{torus, uv_sphere, CloudLayer, LayerKind, OrbitalCloud};
use super::ramp::shade;
use super::rng::{shape_seed, Rng};
use super::subtype::{Axis, DSubtype, OrbitalSubtype, Side, F_LOBES};
use crate::api::config::GeometryConfig;
use crate::chemistry::aufbau::shell_radius;
use crate::chemistry::orbitals::SubshellOrbitals;

/// Field multipliers applied before the color ramp.
pub const S_GAIN: f32 = 2.0;
pub const P_GAIN: f32 = 4.0;
pub const D_GAIN: f32 = 2.0;

/// Shape scale relative to the shell radius.
pub const P_SCALE: f32 = 0.7;
pub const D_SCALE: f32 = 0.65;
pub const F_SCALE: f32 = 0.55;

/// Build the layered cloud for one orbital of shell `n`.
pub fn generate_orbital_shape(
    subtype: OrbitalSubtype,
    n: u8,
    config: &GeometryConfig,
) -> OrbitalCloud {
    let config = config.sanitized();
    let radius = shell_radius(n);
    let mut rng = Rng::new(shape_seed(n, subtype.seed_tag()) ^ config.phase_seed);

    let layers = match subtype {
        OrbitalSubtype::S => s_layers(radius, n, &config, &mut rng),
        OrbitalSubtype::P(axis) => {
            let scale = radius * P_SCALE;
            [Side::Positive, Side::Negative]
                .into_iter()
                .flat_map(|side| p_lobe(axis, side, scale, Vec3::ZERO, n, &config, &mut rng))
                .collect()
        }
        OrbitalSubtype::D(d) => d_layers(d, radius * D_SCALE, n, &config, &mut rng),
        OrbitalSubtype::F(_) => {
            let scale = radius * F_SCALE;
            F_LOBES
                .iter()
                .flat_map(|lobe| {
                    let at = lobe.direction * (scale * 0.8);
                    p_lobe(lobe.axis, lobe.side, scale * 0.45, at, n, &config, &mut rng)
                })
                .collect()
        }
    };

    OrbitalCloud {
        subtype,
        n,
        radius,
        layers,
    }
}

/// One cloud per orbital slot of `subshell`: a single sphere set for s,
/// axes x, y, z for p, xy, xz, yz, x²-y², z² for d, and the eight-lobe set
/// for every f slot. Subshells with `l >= 4` produce nothing.
pub fn generate_subshell_clouds(
    subshell: &SubshellOrbitals,
    config: &GeometryConfig,
) -> Vec<OrbitalCloud> {
    if subshell.kind().is_none() {
        log::warn!("no geometry for subshell n={} l={}", subshell.n, subshell.l);
        return Vec::new();
    }

    subshell
        .orbitals
        .iter()
        .filter_map(|o| OrbitalSubtype::for_slot(subshell.l, o.orbital_index))
        .map(|subtype| generate_orbital_shape(subtype, subshell.n, config))
        .collect()
}

fn s_layers(radius: f32, n: u8, config: &GeometryConfig, rng: &mut Rng) -> Vec<CloudLayer> {
    let count = config.s_layers;
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let (vertices, indices) = uv_sphere(
                radius * (0.3 + 0.7 * t),
                config.s_segments,
                config.s_segments,
                |p| shade(s_density(p.length(), n), S_GAIN),
            );
            CloudLayer {
                kind: LayerKind::Shell,
                index: i,
                count,
                base_opacity: 0.06 + 0.04 * t,
                phase: rng.next_phase(),
                offset: Vec3::ZERO,
                vertices,
                indices,
            }
        })
        .collect()
}

fn p_lobe(
    axis: Axis,
    side: Side,
    radius: f32,
    translation: Vec3,
    n: u8,
    config: &GeometryConfig,
    rng: &mut Rng,
) -> Vec<CloudLayer> {
    let spec = LobeSpec {
        profile: LobeProfile::Dumbbell { axis, side },
        radius,
        layers: config.p_layers,
        segments: config.p_segments,
        gain: P_GAIN,
        translation,
    };
    build_lobe(&spec, |p| p_density(p, axis, n), rng)
}

fn d_layers(
    d: DSubtype,
    scale: f32,
    n: u8,
    config: &GeometryConfig,
    rng: &mut Rng,
) -> Vec<CloudLayer> {
    if let Some((u, v, normal)) = d.clover_frame() {
        return (0..4)
            .flat_map(|k| {
                let spec = LobeSpec {
                    profile: LobeProfile::Clover {
                        u,
                        v,
                        normal,
                        angle: k as f32 * std::f32::consts::FRAC_PI_2,
                    },
                    radius: scale,
                    layers: config.d_layers,
                    segments: config.d_segments,
                    gain: D_GAIN,
                    translation: Vec3::ZERO,
                };
                build_lobe(&spec, |p| d_density(p, d, n), rng)
            })
            .collect();
    }

    match d {
        DSubtype::X2MinusY2 => {
            let lobes = [
                (Axis::X, Side::Positive),
                (Axis::X, Side::Negative),
                (Axis::Y, Side::Positive),
                (Axis::Y, Side::Negative),
            ];
            lobes
                .into_iter()
                .flat_map(|(axis, side)| {
                    let at = axis.unit() * (scale * 0.9 * side.sign());
                    p_lobe(axis, side, scale * 0.6, at, n, config, rng)
                })
                .collect()
        }
        DSubtype::Z2 => {
            let mut layers = z2_torus(scale, n, config, rng);
            for side in [Side::Positive, Side::Negative] {
                let at = Vec3::Z * (scale * 0.8 * side.sign());
                layers.extend(p_lobe(Axis::Z, side, scale * 0.5, at, n, config, rng));
            }
            layers
        }
        DSubtype::Xy | DSubtype::Xz | DSubtype::Yz => Vec::new(),
    }
}

fn z2_torus(scale: f32, n: u8, config: &GeometryConfig, rng: &mut Rng) -> Vec<CloudLayer> {
    let count = config.torus_layers;
    let major = scale * 0.6;
    let tube = scale * 0.15;
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let (vertices, indices) = torus(
                major,
                tube * (0.7 + 0.3 * t),
                config.torus_radial_segments,
                config.torus_tubular_segments,
                |p| shade(d_density(p, DSubtype::Z2, n), D_GAIN),
            );
            CloudLayer {
                kind: LayerKind::Torus,
                index: i,
                count,
                base_opacity: 0.04 + 0.02 * t,
                phase: rng.next_phase(),
                offset: Vec3::ZERO,
                vertices,
                indices,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::aufbau::compute_configuration;
    use crate::chemistry::orbitals::{compute_orbitals, group_subshells};
    use crate::api::config::{MAX_LAYERS, MAX_SEGMENTS};
    use crate::geometry::subtype::FLobeSet;

    fn cfg() -> GeometryConfig {
        GeometryConfig::default()
    }

    fn count_kind(cloud: &OrbitalCloud, kind: LayerKind) -> usize {
        cloud.layers.iter().filter(|l| l.kind == kind).count()
    }

    #[test]
    fn s_cloud_has_eight_growing_spheres() {
        let cloud = generate_orbital_shape(OrbitalSubtype::S, 1, &cfg());
        assert_eq!(cloud.radius, 2.0);
        assert_eq!(cloud.layers.len(), 8);
        for (i, layer) in cloud.layers.iter().enumerate() {
            let r = Vec3::from_array(layer.vertices[0].position).length();
            let expected = 2.0 * (0.3 + 0.7 * i as f32 / 8.0);
            assert!((r - expected).abs() < 1e-4);
            assert!((layer.base_opacity - (0.06 + 0.04 * i as f32 / 8.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn p_cloud_is_two_lobes_on_axis() {
        let cloud = generate_orbital_shape(OrbitalSubtype::P(Axis::Z), 2, &cfg());
        assert_eq!(cloud.layers.len(), 12);
        assert_eq!(count_kind(&cloud, LayerKind::Lobe(Axis::Z)), 12);
        // lobe body offset is carried in the vertices, not the translation
        assert!(cloud.layers.iter().all(|l| l.offset == Vec3::ZERO));
    }

    #[test]
    fn d_clover_subtypes_have_four_petals() {
        for d in [DSubtype::Xy, DSubtype::Xz, DSubtype::Yz] {
            let cloud = generate_orbital_shape(OrbitalSubtype::D(d), 3, &cfg());
            assert_eq!(cloud.layers.len(), 4 * 5);
            assert_eq!(count_kind(&cloud, LayerKind::Clover), 20);
        }
    }

    #[test]
    fn d_clover_petals_lie_in_their_plane() {
        // (subtype, normal component, in-plane components)
        let planes = [(DSubtype::Xz, 1, [0, 2]), (DSubtype::Yz, 0, [1, 2])];
        for (d, normal, [a, b]) in planes {
            let cloud = generate_orbital_shape(OrbitalSubtype::D(d), 3, &cfg());
            let points = cloud.layers.iter().flat_map(|l| &l.vertices).map(|v| v.position);
            let (max_normal, max_plane) = points.fold((0.0f32, 0.0f32), |(mn, mp), p| {
                (mn.max(p[normal].abs()), mp.max(p[a].hypot(p[b])))
            });
            assert!(max_plane > 0.0, "{:?}", d);
            assert!(max_normal < 0.3 * max_plane, "{:?}: {} vs {}", d, max_normal, max_plane);
        }
    }

    #[test]
    fn oversized_config_is_capped_before_building() {
        let config = GeometryConfig {
            s_layers: 1000,
            s_segments: 4096,
            ..cfg()
        };
        let cloud = generate_orbital_shape(OrbitalSubtype::S, 1, &config);
        assert_eq!(cloud.layers.len(), MAX_LAYERS as usize);
        let side = MAX_SEGMENTS as usize + 1;
        assert!(cloud.layers.iter().all(|l| l.vertices.len() == side * side));
    }

    #[test]
    fn d_x2_y2_uses_translated_axis_lobes() {
        let cloud = generate_orbital_shape(OrbitalSubtype::D(DSubtype::X2MinusY2), 3, &cfg());
        assert_eq!(cloud.layers.len(), 4 * 6);
        let scale = shell_radius(3) * D_SCALE;
        assert!((cloud.layers[0].offset.x - 0.9 * scale).abs() < 1e-5);
        assert!((cloud.layers[23].offset.y + 0.9 * scale).abs() < 1e-5);
    }

    #[test]
    fn d_z2_is_torus_plus_polar_lobes() {
        let cloud = generate_orbital_shape(OrbitalSubtype::D(DSubtype::Z2), 4, &cfg());
        assert_eq!(count_kind(&cloud, LayerKind::Torus), 4);
        assert_eq!(count_kind(&cloud, LayerKind::Lobe(Axis::Z)), 12);
        let scale = shell_radius(4) * D_SCALE;
        let polar: Vec<f32> = cloud
            .layers
            .iter()
            .filter(|l| l.kind == LayerKind::Lobe(Axis::Z))
            .map(|l| l.offset.z)
            .collect();
        assert!(polar.iter().any(|z| (z - 0.8 * scale).abs() < 1e-5));
        assert!(polar.iter().any(|z| (z + 0.8 * scale).abs() < 1e-5));
    }

    #[test]
    fn f_cloud_keeps_stylized_offsets() {
        let subtype = OrbitalSubtype::F(FLobeSet { orbital_index: 0 });
        let cloud = generate_orbital_shape(subtype, 4, &cfg());
        assert_eq!(cloud.layers.len(), 8 * 6);
        let scale = shell_radius(4) * F_SCALE;
        let diag = cloud.layers[6 * 6].offset;
        assert!((diag.x - 0.7 * 0.8 * scale).abs() < 1e-5);
        assert!((diag.y - 0.7 * 0.8 * scale).abs() < 1e-5);
        assert_eq!(diag.z, 0.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let subtype = OrbitalSubtype::D(DSubtype::Xz);
        let a = generate_orbital_shape(subtype, 3, &cfg());
        let b = generate_orbital_shape(subtype, 3, &cfg());
        for (la, lb) in a.layers.iter().zip(&b.layers) {
            assert_eq!(la.phase, lb.phase);
            assert_eq!(la.vertices, lb.vertices);
        }
    }

    #[test]
    fn probabilities_are_clamped_and_colors_in_range() {
        let cloud = generate_orbital_shape(OrbitalSubtype::P(Axis::X), 2, &cfg());
        for layer in &cloud.layers {
            for v in &layer.vertices {
                assert!((0.0..=1.0).contains(&v.probability));
                assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }

    #[test]
    fn subshell_clouds_follow_slot_order() {
        let orbitals = compute_orbitals(&compute_configuration(21));
        let subshells = group_subshells(&orbitals);

        let two_p = subshells.iter().find(|s| s.n == 2 && s.l == 1).unwrap();
        let clouds = generate_subshell_clouds(two_p, &cfg());
        let subtypes: Vec<OrbitalSubtype> = clouds.iter().map(|c| c.subtype).collect();
        assert_eq!(
            subtypes,
            vec![
                OrbitalSubtype::P(Axis::X),
                OrbitalSubtype::P(Axis::Y),
                OrbitalSubtype::P(Axis::Z)
            ]
        );

        let three_d = subshells.iter().find(|s| s.n == 3 && s.l == 2).unwrap();
        let clouds = generate_subshell_clouds(three_d, &cfg());
        assert_eq!(clouds.len(), 5);
        assert_eq!(clouds[4].subtype, OrbitalSubtype::D(DSubtype::Z2));

        let one_s = &subshells[0];
        assert_eq!(generate_subshell_clouds(one_s, &cfg()).len(), 1);
    }

    #[test]
    fn unsupported_subshell_yields_nothing() {
        let g = SubshellOrbitals {
            n: 5,
            l: 4,
            orbitals: Vec::new(),
        };
        assert!(generate_subshell_clouds(&g, &cfg()).is_empty());
    }
}
