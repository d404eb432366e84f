pub mod highlight;
pub mod layout;
pub mod rotation;

pub use highlight::{TableHighlight, TileState};
pub use layout::{layout_tiles, row_column_labels, tile_position, LabelCell, Tile};
pub use rotation::TableRotation;
