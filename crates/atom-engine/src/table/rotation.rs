//! Orientation of the whole periodic-table group.
//!
//! Unlike the atom, the table follows the pointer directly: no velocity and
//! no damping. Only the reset button returns it to rest.

use glam::Vec2;

/// Table rotation in radians about (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRotation {
    rotation: Vec2,
    sensitivity: f32,
}

impl TableRotation {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            rotation: Vec2::ZERO,
            sensitivity,
        }
    }

    /// Pointer moved by `(dx, dy)` pixels. Horizontal motion turns about y,
    /// vertical about x. Non-finite deltas are ignored.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.rotation.y += dx * self.sensitivity;
        self.rotation.x += dy * self.sensitivity;
    }

    pub fn reset(&mut self) {
        self.rotation = Vec2::ZERO;
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }
}

impl Default for TableRotation {
    fn default() -> Self {
        Self::new(0.01)
    }
}
