//! Ground-state electron configurations by the Aufbau principle.
//!
//! Subshells fill in order of increasing n + l, ties broken by lower n.
//! No exceptions (Cr, Cu, ...) are modelled.

use serde::Serialize;
use std::fmt;

/// Orbital family of a subshell. `l >= 4` has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubshellKind {
    S,
    P,
    D,
    F,
}

impl SubshellKind {
    pub fn from_l(l: u8) -> Option<Self> {
        match l {
            0 => Some(Self::S),
            1 => Some(Self::P),
            2 => Some(Self::D),
            3 => Some(Self::F),
            _ => None,
        }
    }

    pub fn l(self) -> u8 {
        match self {
            Self::S => 0,
            Self::P => 1,
            Self::D => 2,
            Self::F => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
        }
    }

    /// Number of orbitals, `2l + 1`.
    pub fn orbital_count(self) -> u8 {
        2 * self.l() + 1
    }

    /// Electron capacity, `2(2l + 1)`.
    pub fn capacity(self) -> u8 {
        2 * self.orbital_count()
    }
}

/// Subshell fill order for elements 1..=118.
pub const FILLING_ORDER: [(u8, u8); 19] = [
    (1, 0), // 1s
    (2, 0), // 2s
    (2, 1), // 2p
    (3, 0), // 3s
    (3, 1), // 3p
    (4, 0), // 4s
    (3, 2), // 3d
    (4, 1), // 4p
    (5, 0), // 5s
    (4, 2), // 4d
    (5, 1), // 5p
    (6, 0), // 6s
    (4, 3), // 4f
    (5, 2), // 5d
    (6, 1), // 6p
    (7, 0), // 7s
    (5, 3), // 5f
    (6, 2), // 6d
    (7, 1), // 7p
];

/// Total electrons the fill order can place (118).
pub fn filling_order_capacity() -> u32 {
    FILLING_ORDER
        .iter()
        .map(|&(_, l)| subshell_capacity(l) as u32)
        .sum()
}

/// Maximum electrons in a subshell with azimuthal number `l`.
pub fn subshell_capacity(l: u8) -> u8 {
    2 * (2 * l + 1)
}

/// `"2p"`, or just `"5"` when `l` has no letter.
pub fn subshell_name(n: u8, l: u8) -> String {
    match SubshellKind::from_l(l) {
        Some(kind) => format!("{}{}", n, kind.letter()),
        None => n.to_string(),
    }
}

/// Bohr-inspired display radius for principal number `n` (scene units).
pub fn shell_radius(n: u8) -> f32 {
    n as f32 * 1.5 + 0.5
}

/// One occupied subshell of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shell {
    pub n: u8,
    pub l: u8,
    pub electrons: u8,
}

impl Shell {
    pub fn new(n: u8, l: u8, electrons: u8) -> Self {
        Self { n, l, electrons }
    }

    pub fn kind(&self) -> Option<SubshellKind> {
        SubshellKind::from_l(self.l)
    }

    pub fn name(&self) -> String {
        subshell_name(self.n, self.l)
    }

    /// `n >= 1`, `l < n` and `l <= 3`.
    pub fn is_well_formed(&self) -> bool {
        self.n >= 1 && self.l < self.n && self.kind().is_some()
    }
}

/// Occupied subshells in fill order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElectronConfiguration {
    pub shells: Vec<Shell>,
}

impl ElectronConfiguration {
    pub fn total_electrons(&self) -> u32 {
        self.shells.iter().map(|s| s.electrons as u32).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }
}

impl fmt::Display for ElectronConfiguration {
    /// `1s² 2s² 2p¹`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, shell) in self.shells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", shell.name(), superscript(shell.electrons as u32))?;
        }
        Ok(())
    }
}

/// Unicode superscript digits for `value`.
pub fn superscript(value: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect()
}

/// Ground-state configuration for `electron_count` electrons.
///
/// Zero electrons yields an empty configuration. Electrons beyond what the
/// fill order can hold are left unplaced; callers clamp to 1..=118.
pub fn compute_configuration(electron_count: u32) -> ElectronConfiguration {
    let mut shells = Vec::new();
    let mut remaining = electron_count;

    for &(n, l) in FILLING_ORDER.iter() {
        if remaining == 0 {
            break;
        }
        let electrons = remaining.min(subshell_capacity(l) as u32);
        shells.push(Shell::new(n, l, electrons as u8));
        remaining -= electrons;
    }

    if remaining > 0 {
        log::warn!("{} electrons exceed the fill order and were not placed", remaining);
    }

    ElectronConfiguration { shells }
}
