pub mod animation;
pub mod api;
pub mod bridge;
pub mod chemistry;
pub mod color;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod table;

// Re-export key types at crate root for convenience
pub use api::config::{AnimationConfig, GeometryConfig, ViewerConfig};
pub use api::controller::{AppState, AtomController};
pub use api::view::{nucleus_radius, AtomView, CloudSummary, ElementInfo, NucleusSpec};
pub use animation::clock::{AnimationClock, DragRotation, FrameAccumulator};
pub use animation::fog::{animate_layer, LayerTransform};
pub use bridge::protocol::BufferLayout;
pub use chemistry::{
    compute_configuration, compute_orbitals, ElectronConfiguration, Element, ElementCategory,
    ElementRegistry, LegendEntry, Orbital, Shell, Spin, SubshellKind, SubshellOrbitals,
    MAX_ATOMIC_NUMBER,
};
pub use chemistry::category::{color_for_category, legend};
pub use color::Rgb;
pub use diagram::levels::{build_level_diagram, LevelCell};
pub use error::ElementTableError;
pub use geometry::{
    generate_orbital_shape, generate_subshell_clouds, CloudLayer, CloudVertex, OrbitalCloud,
    OrbitalSubtype,
};
pub use input::queue::{AtomInput, InputQueue};
pub use renderer::cloud_buffer::{CloudBuffers, LayerRecord};
pub use table::{layout_tiles, row_column_labels, LabelCell, TableHighlight, TableRotation, Tile};
