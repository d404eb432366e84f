//! Derived view of the current atom. Rebuilt wholesale on every change.

use serde::Serialize;

use crate::chemistry::aufbau::ElectronConfiguration;
use crate::chemistry::elements::{Element, MAX_ATOMIC_NUMBER};
use crate::chemistry::orbitals::{Orbital, SubshellOrbitals};
use crate::color::Rgb;
use crate::diagram::levels::LevelCell;
use crate::geometry::mesh::OrbitalCloud;
use crate::geometry::subtype::OrbitalSubtype;

/// Nucleus sphere radius for atomic number `z`.
pub fn nucleus_radius(z: u32) -> f32 {
    0.5 + 0.3 * z as f32 / MAX_ATOMIC_NUMBER as f32
}

/// Nucleus sphere plus its back-face glow shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NucleusSpec {
    pub radius: f32,
    pub glow_radius: f32,
    /// `#rrggbb` category color.
    pub color: String,
    pub opacity: f32,
    pub glow_opacity: f32,
}

impl NucleusSpec {
    pub fn new(z: u32, color: Rgb) -> Self {
        let radius = nucleus_radius(z);
        Self {
            radius,
            glow_radius: radius * 1.2,
            color: color.to_css_hex(),
            opacity: 0.9,
            glow_opacity: 0.3,
        }
    }
}

/// Info panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementInfo {
    pub name: String,
    pub symbol: String,
    pub number: u32,
    pub electrons: u32,
    /// Positive for cations, negative for anions.
    pub charge: i32,
    pub category: String,
    pub configuration: String,
    /// Trailing zeros stripped; absent when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atomic_mass: Option<String>,
}

impl ElementInfo {
    pub fn new(element: &Element, electrons: u32, configuration: &ElectronConfiguration) -> Self {
        Self {
            name: element.name.clone(),
            symbol: element.symbol.clone(),
            number: element.number,
            electrons,
            charge: element.number as i32 - electrons as i32,
            category: element.category_name.clone(),
            configuration: configuration.to_string(),
            atomic_mass: element.formatted_mass(),
        }
    }
}

/// What the host needs to know about one cloud without its vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudSummary {
    pub subtype: OrbitalSubtype,
    pub label: String,
    pub n: u8,
    pub radius: f32,
    /// First row of this cloud in the layer table.
    pub first_layer: usize,
    pub layer_count: usize,
    pub vertex_count: usize,
}

impl CloudSummary {
    /// Summary of `cloud` whose first layer lands at row `first_layer`.
    pub fn new(cloud: &OrbitalCloud, first_layer: usize) -> Self {
        Self {
            subtype: cloud.subtype,
            label: cloud.subtype.label(),
            n: cloud.n,
            radius: cloud.radius,
            first_layer,
            layer_count: cloud.layers.len(),
            vertex_count: cloud.vertex_count(),
        }
    }
}

/// Everything derived from the electron count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AtomView {
    pub electron_count: u32,
    pub element_number: u32,
    pub configuration: ElectronConfiguration,
    /// `1s² 2s² 2p¹`
    pub config_string: String,
    pub orbitals: Vec<Orbital>,
    pub subshells: Vec<SubshellOrbitals>,
    pub level_cells: Vec<LevelCell>,
    /// Geometry itself lives only in the flat cloud buffers.
    #[serde(rename = "clouds")]
    pub cloud_summaries: Vec<CloudSummary>,
    pub nucleus: Option<NucleusSpec>,
    pub info: Option<ElementInfo>,
}
