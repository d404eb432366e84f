//! Per-orbital electron placement following Hund's rule.
//!
//! Each subshell gets `2l + 1` slots. Pass one puts a spin-up electron in
//! every slot in index order; pass two pairs spin-down electrons starting
//! again from slot 0. No slot holds two electrons while another is empty.

use serde::Serialize;

use super::aufbau::{ElectronConfiguration, Shell, SubshellKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Up,
    Down,
}

/// One orbital slot of a subshell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orbital {
    pub n: u8,
    pub l: u8,
    /// Slot index in `0..2l+1`.
    pub orbital_index: u8,
    pub electrons: u8,
    /// Up always precedes down. At most two entries.
    pub spins: Vec<Spin>,
}

impl Orbital {
    /// Empty slot.
    pub fn vacant(n: u8, l: u8, orbital_index: u8) -> Self {
        Self {
            n,
            l,
            orbital_index,
            electrons: 0,
            spins: Vec::new(),
        }
    }

    pub fn is_paired(&self) -> bool {
        self.electrons == 2
    }

    pub fn is_half_filled(&self) -> bool {
        self.electrons == 1
    }
}

/// Expand one shell into its orbital slots. Malformed shells (`l >= 4`)
/// yield nothing.
pub fn fill_shell(shell: &Shell) -> Vec<Orbital> {
    let Some(kind) = shell.kind() else {
        log::warn!("skipping shell n={} l={}: unsupported subshell", shell.n, shell.l);
        return Vec::new();
    };
    let slots = kind.orbital_count();
    let mut orbitals: Vec<Orbital> = (0..slots)
        .map(|i| Orbital::vacant(shell.n, shell.l, i))
        .collect();

    let mut remaining = shell.electrons.min(kind.capacity());

    for orbital in orbitals.iter_mut() {
        if remaining == 0 {
            break;
        }
        orbital.electrons = 1;
        orbital.spins.push(Spin::Up);
        remaining -= 1;
    }

    for orbital in orbitals.iter_mut() {
        if remaining == 0 {
            break;
        }
        orbital.electrons = 2;
        orbital.spins.push(Spin::Down);
        remaining -= 1;
    }

    orbitals
}

/// Orbitals for every shell of `config`, in shell order then slot order.
pub fn compute_orbitals(config: &ElectronConfiguration) -> Vec<Orbital> {
    config
        .shells
        .iter()
        .filter(|s| s.n >= 1)
        .flat_map(fill_shell)
        .collect()
}

pub fn total_electrons(orbitals: &[Orbital]) -> u32 {
    orbitals.iter().map(|o| o.electrons as u32).sum()
}

pub fn unpaired_electrons(orbitals: &[Orbital]) -> u32 {
    orbitals.iter().filter(|o| o.is_half_filled()).count() as u32
}

/// All slots of one subshell, padded and sorted by `orbital_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubshellOrbitals {
    pub n: u8,
    pub l: u8,
    pub orbitals: Vec<Orbital>,
}

impl SubshellOrbitals {
    /// Pad `orbitals` with vacant slots up to `2l + 1` and sort by index.
    /// Slots that do not belong to `(n, l)` are dropped.
    pub fn padded(n: u8, l: u8, orbitals: Vec<Orbital>) -> Option<Self> {
        let kind = SubshellKind::from_l(l)?;
        let slots = kind.orbital_count();

        let mut orbitals: Vec<Orbital> = orbitals
            .into_iter()
            .filter(|o| o.n == n && o.l == l && o.orbital_index < slots)
            .collect();
        for i in 0..slots {
            if !orbitals.iter().any(|o| o.orbital_index == i) {
                orbitals.push(Orbital::vacant(n, l, i));
            }
        }
        orbitals.sort_by_key(|o| o.orbital_index);

        Some(Self { n, l, orbitals })
    }

    /// A subshell with no electrons at all.
    pub fn empty(n: u8, l: u8) -> Option<Self> {
        Self::padded(n, l, Vec::new())
    }

    pub fn kind(&self) -> Option<SubshellKind> {
        SubshellKind::from_l(self.l)
    }

    pub fn electrons(&self) -> u32 {
        total_electrons(&self.orbitals)
    }

    pub fn name(&self) -> String {
        super::aufbau::subshell_name(self.n, self.l)
    }
}

/// Group a flat orbital list by `(n, l)` in first-seen order, padding each
/// group to its full slot count.
pub fn group_subshells(orbitals: &[Orbital]) -> Vec<SubshellOrbitals> {
    let mut keys: Vec<(u8, u8)> = Vec::new();
    for o in orbitals {
        if !keys.contains(&(o.n, o.l)) {
            keys.push((o.n, o.l));
        }
    }

    keys.into_iter()
        .filter_map(|(n, l)| {
            let members = orbitals
                .iter()
                .filter(|o| o.n == n && o.l == l)
                .cloned()
                .collect();
            SubshellOrbitals::padded(n, l, members)
        })
        .collect()
}
