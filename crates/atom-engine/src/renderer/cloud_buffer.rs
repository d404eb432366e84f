use bytemuck::{Pod, Zeroable};

use crate::animation::fog::{animate_layer, LayerAnimation, LayerTransform};
use crate::geometry::mesh::{CloudVertex, OrbitalCloud};

/// Largest offset an f32 layer record holds exactly (2^24).
pub const MAX_EXACT_OFFSET: usize = 1 << 24;

/// Per-layer draw record read by the host renderer.
/// Must match the host protocol: 10 floats = 40 bytes stride.
///
/// Counts and offsets are stored as floats like every other wire field.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LayerRecord {
    /// First vertex of this layer in the vertex buffer.
    pub vertex_offset: f32,
    pub vertex_count: f32,
    /// First index of this layer in the index buffer.
    pub index_offset: f32,
    pub index_count: f32,
    /// `LayerKind::code`.
    pub kind: f32,
    /// Cloud this layer belongs to, in view order.
    pub cloud: f32,
    /// Layer translation.
    pub offset_x: f32,
    pub offset_y: f32,
    pub offset_z: f32,
    pub base_opacity: f32,
}

impl LayerRecord {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flattened geometry for every cloud in the current view.
///
/// Indices are local to their layer; add `vertex_offset` when drawing from
/// one shared vertex buffer.
pub struct CloudBuffers {
    /// Clouds pushed since the last clear.
    cloud_count: u32,
    vertices: Vec<CloudVertex>,
    indices: Vec<u32>,
    layers: Vec<LayerRecord>,
    animations: Vec<LayerAnimation>,
    transforms: Vec<f32>,
}

impl CloudBuffers {
    pub fn new() -> Self {
        Self {
            cloud_count: 0,
            vertices: Vec::new(),
            indices: Vec::new(),
            layers: Vec::with_capacity(256),
            animations: Vec::with_capacity(256),
            transforms: Vec::with_capacity(256 * LayerTransform::FLOATS),
        }
    }

    pub fn clear(&mut self) {
        self.cloud_count = 0;
        self.vertices.clear();
        self.indices.clear();
        self.layers.clear();
        self.animations.clear();
        self.transforms.clear();
    }

    /// Replace the contents with `clouds`.
    pub fn rebuild(&mut self, clouds: &[OrbitalCloud]) {
        self.clear();
        for cloud in clouds {
            self.push_cloud(cloud);
        }
    }

    /// Append every layer of `cloud`. New transform rows stay zeroed until
    /// the next `update_transforms`.
    pub fn push_cloud(&mut self, cloud: &OrbitalCloud) {
        for layer in &cloud.layers {
            self.layers.push(LayerRecord {
                vertex_offset: self.vertices.len() as f32,
                vertex_count: layer.vertices.len() as f32,
                index_offset: self.indices.len() as f32,
                index_count: layer.indices.len() as f32,
                kind: layer.kind.code() as f32,
                cloud: self.cloud_count as f32,
                offset_x: layer.offset.x,
                offset_y: layer.offset.y,
                offset_z: layer.offset.z,
                base_opacity: layer.base_opacity,
            });
            self.animations.push(LayerAnimation::from(layer));
            self.vertices.extend_from_slice(&layer.vertices);
            self.indices.extend_from_slice(&layer.indices);
        }
        self.cloud_count += 1;
        self.transforms
            .resize(self.animations.len() * LayerTransform::FLOATS, 0.0);

        if self.indices.len() > MAX_EXACT_OFFSET || self.vertices.len() > MAX_EXACT_OFFSET {
            log::warn!(
                "cloud buffers exceed exact f32 offsets: {} vertices, {} indices",
                self.vertices.len(),
                self.indices.len()
            );
        }
    }

    /// Recompute every layer transform for `elapsed`.
    pub fn update_transforms(&mut self, elapsed: f32) {
        self.transforms.clear();
        for anim in &self.animations {
            self.transforms
                .extend_from_slice(&animate_layer(anim, elapsed).to_floats());
        }
    }

    pub fn vertices(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn layer_table(&self) -> &[f32] {
        bytemuck::cast_slice(&self.layers)
    }

    pub fn layer_records(&self) -> &[LayerRecord] {
        &self.layers
    }

    pub fn transforms(&self) -> &[f32] {
        &self.transforms
    }

    pub fn cloud_count(&self) -> u32 {
        self.cloud_count
    }

    pub fn layer_count(&self) -> u32 {
        self.layers.len() as u32
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices().as_ptr()
    }

    pub fn indices_ptr(&self) -> *const u32 {
        self.indices.as_ptr()
    }

    pub fn layer_table_ptr(&self) -> *const f32 {
        self.layer_table().as_ptr()
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }
}

impl Default for CloudBuffers {
    fn default() -> Self {
        Self::new()
    }
}
