pub mod runner;

pub use runner::ViewerRunner;

use std::cell::RefCell;

use atom_engine::{AtomInput, ElementCategory};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ViewerRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner, or log and return `None` before
/// `viewer_init`.
fn try_with_runner<R>(f: impl FnOnce(&mut ViewerRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(runner) = borrow.as_mut() else {
            log::warn!("viewer not initialized; call viewer_init() first");
            return None;
        };
        Some(f(runner))
    })
}

fn with_runner<R: Default>(f: impl FnOnce(&mut ViewerRunner) -> R) -> R {
    try_with_runner(f).unwrap_or_default()
}

/// Null until the viewer exists.
fn ptr_from_runner<T>(f: impl FnOnce(&mut ViewerRunner) -> *const T) -> *const T {
    try_with_runner(f).unwrap_or(std::ptr::null())
}

/// Set up logging and build the first atom. `config_json` may be omitted.
#[wasm_bindgen]
pub fn viewer_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    web_sys::console::time_with_label("atom-viewer init");
    let config = ViewerRunner::parse_config(config_json.as_deref());
    let runner = ViewerRunner::new(config);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    web_sys::console::time_end_with_label("atom-viewer init");

    log::info!("atom-viewer: initialized");
}

/// Advance by `dt` seconds of wall-clock time.
#[wasm_bindgen]
pub fn viewer_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Atom controls ----

#[wasm_bindgen]
pub fn viewer_add_electron() -> bool {
    with_runner(|r| r.apply(AtomInput::AddElectron))
}

#[wasm_bindgen]
pub fn viewer_remove_electron() -> bool {
    with_runner(|r| r.apply(AtomInput::RemoveElectron))
}

#[wasm_bindgen]
pub fn viewer_reset() -> bool {
    with_runner(|r| r.apply(AtomInput::Reset))
}

#[wasm_bindgen]
pub fn viewer_select_element(number: u32) -> bool {
    with_runner(|r| r.apply(AtomInput::SelectElement(number)))
}

#[wasm_bindgen]
pub fn viewer_drag(dx: f32, dy: f32) {
    with_runner(|r| r.apply(AtomInput::Drag { dx, dy }));
}

#[wasm_bindgen]
pub fn viewer_table_drag(dx: f32, dy: f32) {
    with_runner(|r| r.apply(AtomInput::TableDrag { dx, dy }));
}

/// Return the periodic table to its rest orientation.
#[wasm_bindgen]
pub fn viewer_reset_rotation() {
    with_runner(|r| r.apply(AtomInput::ResetRotation));
}

/// Queue a `(kind, a, b, c)` event for the next tick. Unknown kinds are
/// dropped with a warning.
#[wasm_bindgen]
pub fn viewer_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    match AtomInput::from_custom(kind, a, b, c) {
        Some(input) => with_runner(|r| r.push_input(input)),
        None => log::warn!("unknown custom event kind {}", kind),
    }
}

// ---- Periodic table ----

/// `0` clears the hover.
#[wasm_bindgen]
pub fn viewer_hover_tile(number: u32) {
    let hovered = (number > 0).then_some(number);
    with_runner(|r| r.apply(AtomInput::HoverTile(hovered)));
}

#[wasm_bindgen]
pub fn viewer_click_tile(number: u32) -> bool {
    with_runner(|r| r.apply(AtomInput::ClickTile(number)))
}

/// `index` into the legend order.
#[wasm_bindgen]
pub fn viewer_legend_enter(index: u32) {
    match ElementCategory::ALL.get(index as usize) {
        Some(&category) => {
            with_runner(|r| r.apply(AtomInput::LegendEnter(category)));
        }
        None => log::warn!("legend index {} out of range", index),
    }
}

#[wasm_bindgen]
pub fn viewer_legend_leave() {
    with_runner(|r| r.apply(AtomInput::LegendLeave));
}

// ---- JSON snapshots ----

#[wasm_bindgen]
pub fn get_view_json() -> String {
    with_runner(|r| r.view_json())
}

#[wasm_bindgen]
pub fn get_elements_json() -> String {
    with_runner(|r| r.elements_json())
}

#[wasm_bindgen]
pub fn get_legend_json() -> String {
    with_runner(|r| r.legend_json())
}

#[wasm_bindgen]
pub fn get_table_json() -> String {
    with_runner(|r| r.table_json())
}

#[wasm_bindgen]
pub fn get_buffer_layout_json() -> String {
    with_runner(|r| r.buffer_layout_json())
}

// ---- Buffer accessors ----

#[wasm_bindgen]
pub fn get_vertices_ptr() -> *const f32 {
    ptr_from_runner(|r| r.vertices_ptr())
}

#[wasm_bindgen]
pub fn get_vertices_len() -> u32 {
    with_runner(|r| r.vertices_len())
}

#[wasm_bindgen]
pub fn get_indices_ptr() -> *const u32 {
    ptr_from_runner(|r| r.indices_ptr())
}

#[wasm_bindgen]
pub fn get_indices_len() -> u32 {
    with_runner(|r| r.indices_len())
}

#[wasm_bindgen]
pub fn get_layer_table_ptr() -> *const f32 {
    ptr_from_runner(|r| r.layer_table_ptr())
}

#[wasm_bindgen]
pub fn get_layer_table_len() -> u32 {
    with_runner(|r| r.layer_table_len())
}

#[wasm_bindgen]
pub fn get_transforms_ptr() -> *const f32 {
    ptr_from_runner(|r| r.transforms_ptr())
}

#[wasm_bindgen]
pub fn get_transforms_len() -> u32 {
    with_runner(|r| r.transforms_len())
}

/// Copy of the per-layer transforms, for hosts that do not read wasm memory.
#[wasm_bindgen]
pub fn get_transforms() -> js_sys::Float32Array {
    try_with_runner(|r| js_sys::Float32Array::from(r.controller().buffers().transforms()))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

#[wasm_bindgen]
pub fn get_tile_states_ptr() -> *const f32 {
    ptr_from_runner(|r| r.tile_states_ptr())
}

#[wasm_bindgen]
pub fn get_tile_states_len() -> u32 {
    with_runner(|r| r.tile_states_len())
}

// ---- Scalars ----

#[wasm_bindgen]
pub fn get_electron_count() -> u32 {
    with_runner(|r| r.controller().state().electron_count)
}

#[wasm_bindgen]
pub fn get_element_number() -> u32 {
    with_runner(|r| r.controller().state().element_number)
}

#[wasm_bindgen]
pub fn get_rotation_x() -> f32 {
    with_runner(|r| r.controller().rotation().x)
}

#[wasm_bindgen]
pub fn get_rotation_y() -> f32 {
    with_runner(|r| r.controller().rotation().y)
}

#[wasm_bindgen]
pub fn get_table_rotation_x() -> f32 {
    with_runner(|r| r.controller().table_rotation().x)
}

#[wasm_bindgen]
pub fn get_table_rotation_y() -> f32 {
    with_runner(|r| r.controller().table_rotation().y)
}
