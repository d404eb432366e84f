pub mod levels;

pub use levels::{build_level_diagram, CellFill, LevelCell};
