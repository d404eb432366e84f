//! Periodic-table grid placement.
//!
//! Tiles are 2.5 units wide on a 3.0 pitch. The lanthanide and actinide rows
//! (grid rows 9 and 10) sit below period 7 with an extra gap.

use glam::Vec2;
use serde::Serialize;

use crate::chemistry::elements::{Element, ElementRegistry};
use crate::color::contrast_color;

pub const TILE_SPACING: f32 = 3.0;
pub const TILE_SIZE: f32 = 2.5;
/// Extra drop between period 7 and the f-block rows.
pub const F_BLOCK_GAP: f32 = 3.5;
pub const LANTHANIDE_ROW: u32 = 9;
pub const ACTINIDE_ROW: u32 = 10;

/// Distance from the grid edge to the row and column label cells.
pub fn label_offset() -> f32 {
    let gap = TILE_SPACING - TILE_SIZE;
    TILE_SIZE / 2.0 + gap + TILE_SIZE / 2.0
}

/// Tile centre for grid column `xpos` and row `ypos` (both 1-based).
pub fn tile_position(xpos: u32, ypos: u32) -> Vec2 {
    let x = (xpos as f32 - 1.0) * TILE_SPACING;
    let y = match ypos {
        LANTHANIDE_ROW => -6.0 * TILE_SPACING - F_BLOCK_GAP,
        ACTINIDE_ROW => -7.0 * TILE_SPACING - F_BLOCK_GAP,
        row => -(row as f32 - 1.0) * TILE_SPACING,
    };
    Vec2::new(x, y)
}

/// Static description of one element tile.
#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    pub number: u32,
    pub symbol: String,
    pub position: [f32; 2],
    /// Category color as `#rrggbb`.
    pub color: String,
    /// Lightened text color as `rgb(r, g, b)`.
    pub text_color: String,
}

impl Tile {
    pub fn for_element(element: &Element) -> Self {
        let color = element.category.color();
        Self {
            number: element.number,
            symbol: element.symbol.clone(),
            position: tile_position(element.xpos, element.ypos).to_array(),
            color: color.to_css_hex(),
            text_color: contrast_color(color),
        }
    }
}

/// One tile per registry element, in atomic-number order.
pub fn layout_tiles(registry: &ElementRegistry) -> Vec<Tile> {
    registry.iter().map(Tile::for_element).collect()
}

/// Period or group label cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCell {
    pub text: String,
    pub position: [f32; 2],
}

/// Period labels 1 to 7, the f-block labels "6" and "7", then group labels
/// 1 to 18.
pub fn row_column_labels() -> Vec<LabelCell> {
    let offset = label_offset();
    let mut labels = Vec::with_capacity(7 + 2 + 18);

    for row in 1..=7u32 {
        labels.push(LabelCell {
            text: row.to_string(),
            position: [-offset, tile_position(1, row).y],
        });
    }
    for (text, row) in [("6", LANTHANIDE_ROW), ("7", ACTINIDE_ROW)] {
        labels.push(LabelCell {
            text: text.to_string(),
            position: [-offset, tile_position(1, row).y],
        });
    }
    for col in 1..=18u32 {
        labels.push(LabelCell {
            text: col.to_string(),
            position: [tile_position(col, 1).x, offset],
        });
    }

    labels
}
