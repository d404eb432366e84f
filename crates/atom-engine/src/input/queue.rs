use crate::chemistry::category::ElementCategory;

/// Input events the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtomInput {
    /// Add one electron (capped at 118).
    AddElectron,
    /// Remove one electron (floored at 1).
    RemoveElectron,
    /// Back to the neutral atom of the current element.
    Reset,
    /// Show this element as a neutral atom. Unknown numbers fall back to 1.
    SelectElement(u32),
    /// Pointer dragged over the atom view by `(dx, dy)` pixels.
    Drag { dx: f32, dy: f32 },
    /// Pointer dragged over the periodic table by `(dx, dy)` pixels.
    TableDrag { dx: f32, dy: f32 },
    /// Return the periodic table to its rest orientation.
    ResetRotation,
    /// Pointer over a table tile, or off the table.
    HoverTile(Option<u32>),
    /// Tile clicked: selects and highlights it.
    ClickTile(u32),
    /// Pointer entered a legend row.
    LegendEnter(ElementCategory),
    /// Pointer left the legend.
    LegendLeave,
}

/// Numeric kinds for `AtomInput::from_custom`.
pub mod kind {
    pub const ADD_ELECTRON: u32 = 1;
    pub const REMOVE_ELECTRON: u32 = 2;
    pub const RESET: u32 = 3;
    pub const SELECT_ELEMENT: u32 = 4;
    pub const DRAG: u32 = 5;
    pub const RESET_ROTATION: u32 = 6;
    pub const HOVER_TILE: u32 = 7;
    pub const CLICK_TILE: u32 = 8;
    pub const LEGEND_ENTER: u32 = 9;
    pub const LEGEND_LEAVE: u32 = 10;
    pub const TABLE_DRAG: u32 = 11;
}

impl AtomInput {
    /// Decode a `(kind, a, b, c)` event from the UI layer. `a` carries an
    /// element number, legend index, or drag dx; `b` the drag dy.
    /// Returns `None` for unknown kinds.
    pub fn from_custom(kind: u32, a: f32, b: f32, _c: f32) -> Option<Self> {
        let number = a.max(0.0).round() as u32;
        match kind {
            kind::ADD_ELECTRON => Some(AtomInput::AddElectron),
            kind::REMOVE_ELECTRON => Some(AtomInput::RemoveElectron),
            kind::RESET => Some(AtomInput::Reset),
            kind::SELECT_ELEMENT => Some(AtomInput::SelectElement(number)),
            kind::DRAG => Some(AtomInput::Drag { dx: a, dy: b }),
            kind::RESET_ROTATION => Some(AtomInput::ResetRotation),
            kind::HOVER_TILE => Some(AtomInput::HoverTile((number > 0).then_some(number))),
            kind::CLICK_TILE => Some(AtomInput::ClickTile(number)),
            kind::LEGEND_ENTER => ElementCategory::ALL
                .get(number as usize)
                .map(|&c| AtomInput::LegendEnter(c)),
            kind::LEGEND_LEAVE => Some(AtomInput::LegendLeave),
            kind::TABLE_DRAG => Some(AtomInput::TableDrag { dx: a, dy: b }),
            _ => None,
        }
    }
}

/// Pending inputs. The UI pushes; the controller drains once per frame.
pub struct InputQueue {
    events: Vec<AtomInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: AtomInput) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<AtomInput> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(AtomInput::AddElectron);
        q.push(AtomInput::Drag { dx: 3.0, dy: -1.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events, vec![AtomInput::AddElectron, AtomInput::Drag { dx: 3.0, dy: -1.0 }]);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_events_decode() {
        assert_eq!(
            AtomInput::from_custom(kind::SELECT_ELEMENT, 26.0, 0.0, 0.0),
            Some(AtomInput::SelectElement(26))
        );
        assert_eq!(
            AtomInput::from_custom(kind::DRAG, 4.0, -2.0, 0.0),
            Some(AtomInput::Drag { dx: 4.0, dy: -2.0 })
        );
        assert_eq!(
            AtomInput::from_custom(kind::TABLE_DRAG, -3.0, 1.5, 0.0),
            Some(AtomInput::TableDrag { dx: -3.0, dy: 1.5 })
        );
        assert_eq!(
            AtomInput::from_custom(kind::HOVER_TILE, 0.0, 0.0, 0.0),
            Some(AtomInput::HoverTile(None))
        );
        assert_eq!(
            AtomInput::from_custom(kind::LEGEND_ENTER, 1.0, 0.0, 0.0),
            Some(AtomInput::LegendEnter(ElementCategory::NobleGas))
        );
        assert_eq!(AtomInput::from_custom(kind::LEGEND_ENTER, 42.0, 0.0, 0.0), None);
        assert_eq!(AtomInput::from_custom(99, 0.0, 0.0, 0.0), None);
    }
}
