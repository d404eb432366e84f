//! Wire layout shared with the host page.
//! Must stay in sync with the host-side reader.
//!
//! All buffers are little-endian and exposed as (pointer, length) pairs:
//! ```text
//! vertices:   vertex_count × 7 f32   (x, y, z, r, g, b, probability)
//! indices:    index_count  × 1 u32   (local to the owning layer)
//! layers:     layer_count  × 10 f32  (see LayerRecord)
//! transforms: layer_count  × 7 f32   (sx, sy, sz, opacity, rx, ry, rz)
//! tiles:      118          × 4 f32   (number, scale, inner glow, outer glow)
//! ```

use serde::Serialize;

use crate::animation::fog::LayerTransform;
use crate::geometry::mesh::CloudVertex;
use crate::renderer::cloud_buffer::{CloudBuffers, LayerRecord};
use crate::table::highlight::TileState;

/// Bumped whenever any stride below changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub const VERTEX_FLOATS: usize = CloudVertex::FLOATS;
pub const LAYER_FLOATS: usize = LayerRecord::FLOATS;
pub const TRANSFORM_FLOATS: usize = LayerTransform::FLOATS;
pub const TILE_FLOATS: usize = TileState::FLOATS;

/// Sizes the host needs to view the current buffers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BufferLayout {
    pub protocol_version: u32,
    pub vertex_floats: usize,
    pub layer_floats: usize,
    pub transform_floats: usize,
    pub tile_floats: usize,
    pub vertex_count: usize,
    pub index_count: usize,
    pub layer_count: usize,
}

impl BufferLayout {
    pub fn from_buffers(buffers: &CloudBuffers) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            vertex_floats: VERTEX_FLOATS,
            layer_floats: LAYER_FLOATS,
            transform_floats: TRANSFORM_FLOATS,
            tile_floats: TILE_FLOATS,
            vertex_count: buffers.vertex_count() as usize,
            index_count: buffers.indices().len(),
            layer_count: buffers.layer_count() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_match_struct_sizes() {
        assert_eq!(std::mem::size_of::<CloudVertex>(), VERTEX_FLOATS * 4);
        assert_eq!(std::mem::size_of::<LayerRecord>(), LAYER_FLOATS * 4);
        assert_eq!(TRANSFORM_FLOATS, 7);
        assert_eq!(TILE_FLOATS, 4);
    }

    #[test]
    fn empty_buffers_layout() {
        let layout = BufferLayout::from_buffers(&CloudBuffers::new());
        assert_eq!(layout.protocol_version, PROTOCOL_VERSION);
        assert_eq!(layout.vertex_count, 0);
        assert_eq!(layout.layer_count, 0);
    }
}
