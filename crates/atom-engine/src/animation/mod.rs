pub mod clock;
pub mod easing;
pub mod fog;

pub use clock::{AnimationClock, DragRotation};
pub use fog::{animate_layer, LayerAnimation, LayerTransform};
