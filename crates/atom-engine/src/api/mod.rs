pub mod config;
pub mod controller;
pub mod view;

pub use config::{AnimationConfig, GeometryConfig, ViewerConfig};
pub use controller::{AppState, AtomController};
pub use view::{AtomView, CloudSummary, ElementInfo, NucleusSpec};
