pub mod aufbau;
pub mod category;
pub mod elements;
pub mod orbitals;

pub use aufbau::{compute_configuration, ElectronConfiguration, Shell, SubshellKind};
pub use category::{ElementCategory, LegendEntry};
pub use elements::{Element, ElementRegistry, MAX_ATOMIC_NUMBER};
pub use orbitals::{compute_orbitals, Orbital, Spin, SubshellOrbitals};
