//! Element categories and their tile colors.

use serde::Serialize;

use crate::color::Rgb;

/// Element category for color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    NonMetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    Metalloid,
    PostTransitionMetal,
    Lanthanide,
    Actinide,
}

/// One row of the category legend.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub category: ElementCategory,
    /// Display label ("Noble Gas").
    pub label: &'static str,
    /// Key used in the element table ("noble gas").
    pub key: &'static str,
    /// `#rrggbb`
    pub color: String,
}

impl ElementCategory {
    /// Legend order.
    pub const ALL: [ElementCategory; 9] = [
        Self::NonMetal,
        Self::NobleGas,
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::Metalloid,
        Self::PostTransitionMetal,
        Self::Lanthanide,
        Self::Actinide,
    ];

    /// Parse a category name from the element table.
    /// Anything unrecognised falls back to `NonMetal`.
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "nonmetal" => Self::NonMetal,
            "noble gas" => Self::NobleGas,
            "alkali metal" => Self::AlkaliMetal,
            "alkaline earth metal" => Self::AlkalineEarthMetal,
            "transition metal" => Self::TransitionMetal,
            "metalloid" => Self::Metalloid,
            "post-transition metal" => Self::PostTransitionMetal,
            "lanthanide" => Self::Lanthanide,
            "actinide" => Self::Actinide,
            _ => Self::NonMetal,
        }
    }

    /// Table key, the inverse of `from_name`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NonMetal => "nonmetal",
            Self::NobleGas => "noble gas",
            Self::AlkaliMetal => "alkali metal",
            Self::AlkalineEarthMetal => "alkaline earth metal",
            Self::TransitionMetal => "transition metal",
            Self::Metalloid => "metalloid",
            Self::PostTransitionMetal => "post-transition metal",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NonMetal => "Nonmetal",
            Self::NobleGas => "Noble Gas",
            Self::AlkaliMetal => "Alkali Metal",
            Self::AlkalineEarthMetal => "Alkaline Earth Metal",
            Self::TransitionMetal => "Transition Metal",
            Self::Metalloid => "Metalloid",
            Self::PostTransitionMetal => "Post-Transition Metal",
            Self::Lanthanide => "Lanthanide",
            Self::Actinide => "Actinide",
        }
    }

    /// Packed tile color.
    pub fn hex(&self) -> u32 {
        match self {
            Self::NonMetal => 0x4a90e2,
            Self::NobleGas => 0x9b59b6,
            Self::AlkaliMetal => 0xf39c12,
            Self::AlkalineEarthMetal => 0xe67e22,
            Self::TransitionMetal => 0xe74c3c,
            Self::Metalloid => 0x3498db,
            Self::PostTransitionMetal => 0x1abc9c,
            Self::Lanthanide => 0xf1c40f,
            Self::Actinide => 0xe91e63,
        }
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_hex(self.hex())
    }

    pub fn legend_entry(&self) -> LegendEntry {
        LegendEntry {
            category: *self,
            label: self.label(),
            key: self.key(),
            color: self.color().to_css_hex(),
        }
    }
}

/// Color for a raw category string, with the nonmetal fallback.
pub fn color_for_category(name: &str) -> Rgb {
    ElementCategory::from_name(name).color()
}

/// Legend rows in display order.
pub fn legend() -> Vec<LegendEntry> {
    ElementCategory::ALL.iter().map(|c| c.legend_entry()).collect()
}
