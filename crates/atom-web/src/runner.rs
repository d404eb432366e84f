use atom_engine::{
    layout_tiles, legend, row_column_labels, AtomController, AtomInput, BufferLayout,
    ElementRegistry, LabelCell, Tile, ViewerConfig,
};
use serde::Serialize;

/// Static periodic-table geometry for the host to lay out once.
#[derive(Serialize)]
struct TableSnapshot {
    tiles: Vec<Tile>,
    labels: Vec<LabelCell>,
}

/// Owns the controller for the lifetime of the page.
///
/// wasm-bindgen cannot export the controller directly, so `lib.rs` keeps one
/// `ViewerRunner` in a `thread_local!` and forwards free functions to it.
pub struct ViewerRunner {
    controller: AtomController,
}

impl ViewerRunner {
    /// A failed registry load is logged and leaves the table empty; the
    /// atom itself still renders.
    pub fn new(config: ViewerConfig) -> Self {
        let registry = match ElementRegistry::load() {
            Ok(registry) => registry,
            Err(err) => {
                log::error!("failed to load element table: {}", err);
                ElementRegistry::default()
            }
        };
        Self {
            controller: AtomController::new(registry, config),
        }
    }

    /// Config JSON from the host, defaults for anything missing or malformed.
    pub fn parse_config(json: Option<&str>) -> ViewerConfig {
        match json.map(ViewerConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::warn!("ignoring viewer config: {}", err);
                ViewerConfig::default()
            }
            None => ViewerConfig::default(),
        }
    }

    /// Drain queued inputs, then advance animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.controller.process_input();
        self.controller.advance(dt);
    }

    /// Queue an input for the next tick.
    pub fn push_input(&mut self, input: AtomInput) {
        self.controller.push_input(input);
    }

    /// Apply an input now so the host can read the new view straight away.
    pub fn apply(&mut self, input: AtomInput) -> bool {
        self.controller.apply(input)
    }

    pub fn controller(&self) -> &AtomController {
        &self.controller
    }

    // ---- JSON snapshots ----

    pub fn view_json(&self) -> String {
        to_json(self.controller.view())
    }

    pub fn elements_json(&self) -> String {
        let elements: Vec<_> = self.controller.registry().iter().collect();
        to_json(&elements)
    }

    pub fn legend_json(&self) -> String {
        to_json(&legend())
    }

    pub fn table_json(&self) -> String {
        to_json(&TableSnapshot {
            tiles: layout_tiles(self.controller.registry()),
            labels: row_column_labels(),
        })
    }

    pub fn buffer_layout_json(&self) -> String {
        to_json(&BufferLayout::from_buffers(self.controller.buffers()))
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.controller.buffers().vertices_ptr()
    }

    pub fn vertices_len(&self) -> u32 {
        self.controller.buffers().vertices().len() as u32
    }

    pub fn indices_ptr(&self) -> *const u32 {
        self.controller.buffers().indices_ptr()
    }

    pub fn indices_len(&self) -> u32 {
        self.controller.buffers().indices().len() as u32
    }

    pub fn layer_table_ptr(&self) -> *const f32 {
        self.controller.buffers().layer_table_ptr()
    }

    pub fn layer_table_len(&self) -> u32 {
        self.controller.buffers().layer_table().len() as u32
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.controller.buffers().transforms_ptr()
    }

    pub fn transforms_len(&self) -> u32 {
        self.controller.buffers().transforms().len() as u32
    }

    pub fn tile_states_ptr(&self) -> *const f32 {
        self.controller.tile_states_ptr()
    }

    pub fn tile_states_len(&self) -> u32 {
        self.controller.tile_states().len() as u32
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("snapshot serialization failed: {}", err);
        "null".to_string()
    })
}
