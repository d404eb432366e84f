//! Periodic table reference data and registry.
//!
//! Element records are embedded at compile time from `data/periodic-table.json`
//! and never change for the life of the process.

use serde::{Deserialize, Serialize};

use super::category::ElementCategory;
use crate::error::{ElementTableError, Result};

/// Embed the periodic table JSON at compile time.
const PERIODIC_TABLE_JSON: &str = include_str!("../../data/periodic-table.json");

/// Highest atomic number in the table; also the electron-count ceiling.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Raw JSON element record.
#[derive(Debug, Deserialize)]
pub struct RawElement {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub atomic_mass: Option<f64>,
    pub xpos: u32,
    pub ypos: u32,
}

/// Root structure for the JSON file.
#[derive(Debug, Deserialize)]
pub struct PeriodicTableJson {
    pub elements: Vec<RawElement>,
}

/// Processed element data for runtime use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    pub category: ElementCategory,
    /// Category string exactly as it appears in the table.
    pub category_name: String,
    pub atomic_mass: Option<f64>,
    /// Grid column (1..=18).
    pub xpos: u32,
    /// Grid row (1..=7, 9 = lanthanides, 10 = actinides).
    pub ypos: u32,
}

impl Element {
    /// Atomic mass formatted for display, `None` when unknown.
    pub fn formatted_mass(&self) -> Option<String> {
        self.atomic_mass.map(format_atomic_mass)
    }
}

/// Seven decimal places with trailing zeros (and a bare point) removed.
pub fn format_atomic_mass(mass: f64) -> String {
    let fixed = format!("{:.7}", mass);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Element registry ordered by atomic number.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    /// `elements[i].number == i + 1`.
    elements: Vec<Element>,
}

impl ElementRegistry {
    /// Load the registry from embedded JSON.
    pub fn load() -> Result<Self> {
        Self::from_json(PERIODIC_TABLE_JSON)
    }

    /// Parse and validate a registry from a JSON string.
    ///
    /// Atomic numbers must be unique and run contiguously from 1.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: PeriodicTableJson = serde_json::from_str(json)?;
        if raw.elements.is_empty() {
            return Err(ElementTableError::Empty);
        }

        let mut raw_elements = raw.elements;
        raw_elements.sort_by_key(|e| e.number);

        let mut elements = Vec::with_capacity(raw_elements.len());

        for (i, raw_elem) in raw_elements.into_iter().enumerate() {
            let expected = i as u32 + 1;
            if raw_elem.number != expected {
                if raw_elem.number + 1 == expected {
                    return Err(ElementTableError::DuplicateNumber(raw_elem.number));
                }
                return Err(ElementTableError::NonContiguous {
                    expected,
                    found: raw_elem.number,
                });
            }

            elements.push(Element {
                number: raw_elem.number,
                symbol: raw_elem.symbol,
                name: raw_elem.name,
                category: ElementCategory::from_name(&raw_elem.category),
                category_name: raw_elem.category,
                atomic_mass: raw_elem.atomic_mass,
                xpos: raw_elem.xpos,
                ypos: raw_elem.ypos,
            });
        }

        log::debug!("element registry loaded: {} elements", elements.len());
        Ok(Self { elements })
    }

    /// Get element by atomic number.
    pub fn get(&self, number: u32) -> Option<&Element> {
        let idx = (number as usize).checked_sub(1)?;
        self.elements.get(idx)
    }

    /// First element in the table (hydrogen).
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Element whose atomic number matches the electron count, or the one
    /// closest to it. Ties resolve to the lower atomic number.
    pub fn nearest_by_electron_count(&self, electrons: u32) -> Option<&Element> {
        if let Some(exact) = self.get(electrons) {
            return Some(exact);
        }
        self.elements
            .iter()
            .min_by_key(|e| (e.number as i64 - electrons as i64).abs())
    }

    /// Elements of one category in atomic-number order.
    pub fn by_category(&self, category: ElementCategory) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.category == category)
    }

    /// Iterate in atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
