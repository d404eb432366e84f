//! Application state and the single rebuild path behind every transition.

use glam::Vec2;
use serde::Serialize;

use crate::animation::clock::{AnimationClock, DragRotation, FRAME_SECONDS};
use crate::api::config::ViewerConfig;
use crate::api::view::{AtomView, CloudSummary, ElementInfo, NucleusSpec};
use crate::chemistry::aufbau::compute_configuration;
use crate::chemistry::elements::{Element, ElementRegistry, MAX_ATOMIC_NUMBER};
use crate::chemistry::orbitals::{compute_orbitals, group_subshells};
use crate::diagram::levels::build_level_diagram;
use crate::geometry::generator::generate_subshell_clouds;
use crate::input::queue::{AtomInput, InputQueue};
use crate::renderer::cloud_buffer::CloudBuffers;
use crate::table::highlight::TableHighlight;
use crate::table::rotation::TableRotation;

/// The only mutable drivers of the atom view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppState {
    /// Always in `1..=118`.
    pub electron_count: u32,
    pub element_number: u32,
}

/// Owns the state, applies inputs and keeps every derived view in step.
pub struct AtomController {
    registry: ElementRegistry,
    config: ViewerConfig,
    state: AppState,
    view: AtomView,
    buffers: CloudBuffers,
    clock: AnimationClock,
    rotation: DragRotation,
    table_rotation: TableRotation,
    highlight: TableHighlight,
    /// `TileState` rows for every registry element.
    tiles: Vec<f32>,
    input: InputQueue,
}

impl AtomController {
    pub fn new(registry: ElementRegistry, config: ViewerConfig) -> Self {
        let animation = &config.animation;
        let mut controller = Self {
            clock: AnimationClock::new(animation.time_step),
            rotation: DragRotation::new(animation.drag_sensitivity, animation.damping),
            table_rotation: TableRotation::new(animation.drag_sensitivity),
            highlight: TableHighlight::new(animation.glow_fade_ms),
            state: AppState {
                electron_count: 1,
                element_number: 1,
            },
            view: AtomView::default(),
            buffers: CloudBuffers::new(),
            tiles: Vec::new(),
            input: InputQueue::new(),
            registry,
            config,
        };
        let initial = controller.config.initial_element;
        controller.select_element(initial);
        controller.refresh_tiles();
        controller
    }

    /// Queue an input for the next `process_input`.
    pub fn push_input(&mut self, input: AtomInput) {
        self.input.push(input);
    }

    /// Apply every queued input in order. Returns true if the atom was rebuilt.
    pub fn process_input(&mut self) -> bool {
        let mut rebuilt = false;
        for input in self.input.drain() {
            rebuilt |= self.apply(input);
        }
        rebuilt
    }

    /// Apply one input immediately. Returns true if the atom was rebuilt.
    pub fn apply(&mut self, input: AtomInput) -> bool {
        let rebuilt = self.apply_inner(input);
        self.refresh_tiles();
        rebuilt
    }

    fn apply_inner(&mut self, input: AtomInput) -> bool {
        match input {
            AtomInput::AddElectron => self.add_electron(),
            AtomInput::RemoveElectron => self.remove_electron(),
            AtomInput::Reset => {
                self.reset();
                true
            }
            AtomInput::SelectElement(n) => {
                self.select_element(n);
                true
            }
            AtomInput::Drag { dx, dy } => {
                self.rotation.drag(dx, dy);
                false
            }
            AtomInput::TableDrag { dx, dy } => {
                self.table_rotation.drag(dx, dy);
                false
            }
            AtomInput::ResetRotation => {
                self.table_rotation.reset();
                false
            }
            AtomInput::HoverTile(n) => {
                self.highlight.set_hovered(n);
                false
            }
            AtomInput::ClickTile(n) => {
                if self.registry.get(n).is_none() {
                    log::warn!("click on unknown tile {}", n);
                    return false;
                }
                self.highlight.set_active(n);
                self.select_element(n);
                true
            }
            AtomInput::LegendEnter(category) => {
                self.highlight.legend_enter(category, &self.registry);
                false
            }
            AtomInput::LegendLeave => {
                self.highlight.legend_leave(&self.registry);
                false
            }
        }
    }

    fn refresh_tiles(&mut self) {
        self.tiles.clear();
        for state in self.highlight.tile_states(&self.registry) {
            self.tiles.extend_from_slice(&state.to_floats());
        }
    }

    /// One more electron, up to 118. The element follows the count.
    pub fn add_electron(&mut self) -> bool {
        if self.state.electron_count >= MAX_ATOMIC_NUMBER {
            return false;
        }
        self.set_electron_count(self.state.electron_count + 1);
        true
    }

    /// One fewer electron, down to 1.
    pub fn remove_electron(&mut self) -> bool {
        if self.state.electron_count <= 1 {
            return false;
        }
        self.set_electron_count(self.state.electron_count - 1);
        true
    }

    /// Neutral atom of the current element.
    pub fn reset(&mut self) {
        self.state.electron_count = self.state.element_number.clamp(1, MAX_ATOMIC_NUMBER);
        self.rebuild();
    }

    /// Neutral atom of element `number`, or of the first element when the
    /// number is unknown.
    pub fn select_element(&mut self, number: u32) {
        let resolved = match self.registry.get(number).or_else(|| self.registry.first()) {
            Some(element) => element.number,
            None if (1..=MAX_ATOMIC_NUMBER).contains(&number) => number,
            None => 1,
        };
        self.state = AppState {
            electron_count: resolved,
            element_number: resolved,
        };
        self.rebuild();
    }

    fn set_electron_count(&mut self, count: u32) {
        let count = count.clamp(1, MAX_ATOMIC_NUMBER);
        self.state.electron_count = count;
        if let Some(element) = self.registry.nearest_by_electron_count(count) {
            self.state.element_number = element.number;
        } else {
            self.state.element_number = count;
        }
        self.rebuild();
    }

    /// Recompute every derived view from `state`. Old geometry is released
    /// first; new clouds are generated one subshell at a time and copied into
    /// the flat buffers, so at most one subshell's meshes exist outside them.
    fn rebuild(&mut self) {
        self.view.cloud_summaries.clear();
        self.buffers.clear();

        let AppState {
            electron_count,
            element_number,
        } = self.state;

        let configuration = compute_configuration(electron_count);
        let orbitals = compute_orbitals(&configuration);
        let subshells = group_subshells(&orbitals);
        let level_cells = build_level_diagram(&subshells);

        let mut cloud_summaries = Vec::new();
        for subshell in &subshells {
            for cloud in generate_subshell_clouds(subshell, &self.config.geometry) {
                cloud_summaries.push(CloudSummary::new(&cloud, self.buffers.layer_count() as usize));
                self.buffers.push_cloud(&cloud);
            }
        }
        self.buffers.update_transforms(self.clock.elapsed());

        let element = self.registry.get(element_number);
        let color = element.map(|e| e.category.color()).unwrap_or_default();

        self.view = AtomView {
            electron_count,
            element_number,
            config_string: configuration.to_string(),
            info: element.map(|e| ElementInfo::new(e, electron_count, &configuration)),
            nucleus: Some(NucleusSpec::new(element_number, color)),
            cloud_summaries,
            configuration,
            orbitals,
            subshells,
            level_cells,
        };

        log::debug!(
            "rebuilt atom: Z={} electrons={} clouds={} layers={}",
            element_number,
            electron_count,
            self.view.cloud_summaries.len(),
            self.buffers.layer_count()
        );
    }

    /// Advance by whole animation frames.
    pub fn tick(&mut self, frames: u32) {
        self.clock.tick(frames);
        self.rotation.step(frames);
        self.highlight.update(frames as f32 * FRAME_SECONDS * 1000.0);
        self.buffers.update_transforms(self.clock.elapsed());
        self.refresh_tiles();
    }

    /// Advance by wall-clock seconds. Returns the frames that elapsed.
    pub fn advance(&mut self, seconds: f32) -> u32 {
        let frames = self.clock.advance(seconds);
        self.rotation.step(frames);
        self.highlight.update(seconds * 1000.0);
        if frames > 0 {
            self.buffers.update_transforms(self.clock.elapsed());
        }
        self.refresh_tiles();
        frames
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn view(&self) -> &AtomView {
        &self.view
    }

    pub fn element(&self) -> Option<&Element> {
        self.registry.get(self.state.element_number)
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn buffers(&self) -> &CloudBuffers {
        &self.buffers
    }

    /// Flat tile states, `TILE_FLOATS` per element.
    pub fn tile_states(&self) -> &[f32] {
        &self.tiles
    }

    pub fn tile_states_ptr(&self) -> *const f32 {
        self.tiles.as_ptr()
    }

    pub fn highlight(&self) -> &TableHighlight {
        &self.highlight
    }

    /// Atom orientation in radians about (x, y).
    pub fn rotation(&self) -> Vec2 {
        self.rotation.rotation()
    }

    /// Periodic-table orientation in radians about (x, y).
    pub fn table_rotation(&self) -> Vec2 {
        self.table_rotation.rotation()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}
