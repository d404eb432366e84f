pub mod cloud_buffer;

pub use cloud_buffer::{CloudBuffers, LayerRecord};
