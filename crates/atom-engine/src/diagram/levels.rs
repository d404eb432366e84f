//! Energy-level diagram: one box per orbital for shells 1 to 7.
//!
//! Columns run s | p p p | d d d d d | f f f f f f f. Higher shells sit
//! higher; p, d and f rows are nudged down so the boxes read in rough
//! energy order.

use serde::Serialize;

use crate::chemistry::aufbau::{subshell_name, SubshellKind};
use crate::chemistry::orbitals::{Spin, SubshellOrbitals};

/// Horizontal pitch of one cell (24 px box plus 1 px margin each side).
pub const CELL_SPACING: f32 = 26.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const MAX_SHELL: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFill {
    Empty,
    Half,
    Full,
}

impl CellFill {
    pub fn from_electrons(electrons: u8) -> Self {
        match electrons {
            0 => CellFill::Empty,
            1 => CellFill::Half,
            _ => CellFill::Full,
        }
    }
}

/// One orbital box of the diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelCell {
    pub n: u8,
    pub l: u8,
    pub orbital_index: u8,
    /// Subshell label, e.g. `"3d"`.
    pub label: String,
    /// Left edge in px.
    pub x: f32,
    /// Top edge in px, 0 at shell 7.
    pub y: f32,
    pub fill: CellFill,
    pub spins: Vec<Spin>,
}

/// First column of a subshell family.
fn first_column(kind: SubshellKind) -> u32 {
    match kind {
        SubshellKind::S => 0,
        SubshellKind::P => 1,
        SubshellKind::D => 4,
        SubshellKind::F => 9,
    }
}

/// Lowest shell that has a row for `kind`.
fn first_shell(kind: SubshellKind) -> u8 {
    kind.l() + 1
}

/// Downward nudge of a subshell row.
fn row_offset(kind: SubshellKind, n: u8) -> f32 {
    match kind {
        SubshellKind::S => 0.0,
        SubshellKind::P if (2..=6).contains(&n) => 10.0,
        SubshellKind::D if (3..=6).contains(&n) => 5.0,
        SubshellKind::F if (4..=5).contains(&n) => 7.0,
        _ => 0.0,
    }
}

/// Top edge of shell `n`'s base row.
pub fn shell_row_y(n: u8) -> f32 {
    (MAX_SHELL as f32 - n as f32) * ROW_HEIGHT
}

/// Build every cell for shells 1 to 7, filling spins from `subshells`.
/// Subshells missing from the input render as empty boxes.
pub fn build_level_diagram(subshells: &[SubshellOrbitals]) -> Vec<LevelCell> {
    let mut cells = Vec::new();

    for n in 1..=MAX_SHELL {
        for kind in [SubshellKind::S, SubshellKind::P, SubshellKind::D, SubshellKind::F] {
            if n < first_shell(kind) {
                continue;
            }
            let l = kind.l();
            let source = subshells.iter().find(|s| s.n == n && s.l == l);
            let y = shell_row_y(n) + row_offset(kind, n);

            for i in 0..kind.orbital_count() {
                let orbital = source.and_then(|s| s.orbitals.iter().find(|o| o.orbital_index == i));
                let (electrons, spins) = orbital
                    .map(|o| (o.electrons, o.spins.clone()))
                    .unwrap_or((0, Vec::new()));

                cells.push(LevelCell {
                    n,
                    l,
                    orbital_index: i,
                    label: subshell_name(n, l),
                    x: CELL_SPACING * (first_column(kind) + i as u32) as f32,
                    y,
                    fill: CellFill::from_electrons(electrons),
                    spins,
                });
            }
        }
    }

    cells
}
