pub mod field;
pub mod generator;
pub mod lobe;
pub mod mesh;
pub mod ramp;
pub mod rng;
pub mod subtype;

pub use generator::{generate_orbital_shape, generate_subshell_clouds};
pub use mesh::{CloudLayer, CloudVertex, LayerKind, OrbitalCloud};
pub use ramp::ramp_color;
pub use subtype::{Axis, DSubtype, FLobeSet, OrbitalSubtype};
