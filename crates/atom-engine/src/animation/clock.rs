//! External animation clock and drag-rotation inertia.
//!
//! Neither touches cloud data. The clock only produces an elapsed value that
//! the pure layer transform reads.

use glam::Vec2;

use crate::api::config::AnimationConfig;

/// Display frame length the animation is tuned for.
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Turns variable frame times into whole animation frames.
#[derive(Debug, Clone)]
pub struct FrameAccumulator {
    dt: f32,
    accumulator: f32,
}

impl FrameAccumulator {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time. Returns how many whole frames elapsed.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // a stalled tab should not replay seconds of animation
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

}

/// Monotonic animation time, advanced a fixed amount per frame.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    step: f32,
    elapsed: f32,
    frames: u64,
    accumulator: FrameAccumulator,
}

impl AnimationClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            elapsed: 0.0,
            frames: 0,
            accumulator: FrameAccumulator::new(FRAME_SECONDS),
        }
    }

    /// Advance by whole frames.
    pub fn tick(&mut self, frames: u32) {
        self.frames += frames as u64;
        self.elapsed += self.step * frames as f32;
    }

    /// Advance by wall-clock seconds. Returns the frames that elapsed.
    pub fn advance(&mut self, seconds: f32) -> u32 {
        let frames = self.accumulator.accumulate(seconds);
        self.tick(frames);
        frames
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(AnimationConfig::default().time_step)
    }
}

/// Whole-atom rotation driven by pointer drags, with per-frame damping.
#[derive(Debug, Clone)]
pub struct DragRotation {
    /// Radians about (x, y).
    rotation: Vec2,
    /// Radians per frame about (x, y).
    velocity: Vec2,
    sensitivity: f32,
    damping: f32,
}

impl DragRotation {
    pub fn new(sensitivity: f32, damping: f32) -> Self {
        Self {
            rotation: Vec2::ZERO,
            velocity: Vec2::ZERO,
            sensitivity,
            damping: damping.clamp(0.0, 1.0),
        }
    }

    /// Pointer moved by `(dx, dy)` pixels while dragging. Horizontal motion
    /// spins about y, vertical about x. Non-finite deltas are ignored so the
    /// rotation can never go NaN.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.velocity.y += dx * self.sensitivity;
        self.velocity.x += dy * self.sensitivity;
    }

    /// Apply velocity then damp it, once per frame.
    pub fn step(&mut self, frames: u32) {
        for _ in 0..frames {
            self.rotation += self.velocity;
            self.velocity *= self.damping;
        }
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

impl Default for DragRotation {
    fn default() -> Self {
        let config = AnimationConfig::default();
        Self::new(config.drag_sensitivity, config.damping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jittery_display_still_yields_sixty_frames_a_second() {
        let mut acc = FrameAccumulator::new(FRAME_SECONDS);
        // alternating 12 ms and 21.333 ms frames average out to 60 Hz
        let mut frames = 0;
        for i in 0..60 {
            frames += acc.accumulate(if i % 2 == 0 { 0.012 } else { 0.021_333_4 });
        }
        assert!((59..=60).contains(&frames), "got {} frames", frames);
    }

    #[test]
    fn high_refresh_display_skips_some_ticks() {
        let mut acc = FrameAccumulator::new(FRAME_SECONDS);
        // 120 Hz: every other display frame advances the animation
        let ticks: Vec<u32> = (0..4).map(|_| acc.accumulate(1.0 / 120.0 + 1e-6)).collect();
        assert_eq!(ticks.iter().sum::<u32>(), 2);
        assert!(ticks.iter().all(|&t| t <= 1));
    }

    #[test]
    fn stalled_tab_replays_at_most_ten_frames() {
        let mut acc = FrameAccumulator::new(FRAME_SECONDS);
        assert_eq!(acc.accumulate(5.0), 10);
        // the backlog is dropped, not carried into the next frame
        assert_eq!(acc.accumulate(0.0), 0);
    }

    #[test]
    fn negative_frame_time_does_not_rewind() {
        let mut acc = FrameAccumulator::new(FRAME_SECONDS);
        assert_eq!(acc.accumulate(0.010), 0);
        assert_eq!(acc.accumulate(-5.0), 0);
        assert_eq!(acc.accumulate(0.007), 1);
    }

    #[test]
    fn clock_steps_a_hundredth_per_frame() {
        let mut clock = AnimationClock::default();
        clock.tick(3);
        assert!((clock.elapsed() - 0.03).abs() < 1e-6);
        assert_eq!(clock.frames(), 3);
        assert_eq!(clock.advance(FRAME_SECONDS * 2.0 + 0.001), 2);
        assert_eq!(clock.frames(), 5);
    }

    #[test]
    fn drag_builds_velocity_then_decays() {
        let mut rot = DragRotation::default();
        rot.drag(10.0, -4.0);
        assert!((rot.velocity().y - 0.1).abs() < 1e-6);
        assert!((rot.velocity().x + 0.04).abs() < 1e-6);

        rot.step(1);
        assert!((rot.rotation().y - 0.1).abs() < 1e-6);
        assert!((rot.velocity().y - 0.095).abs() < 1e-6);

        rot.step(500);
        assert!(rot.velocity().length() < 1e-6);
        // geometric series bound: v0 / (1 - 0.95) = 2.0
        assert!(rot.rotation().y < 2.0 + 1e-3);
    }

    #[test]
    fn non_finite_drag_keeps_rotation_finite() {
        let mut rot = DragRotation::default();
        rot.drag(10.0, 0.0);
        rot.drag(f32::NAN, 1.0);
        rot.drag(1.0, f32::NEG_INFINITY);
        rot.step(5);
        assert!(rot.rotation().is_finite());
        assert!(rot.velocity().is_finite());
        assert!(rot.rotation().y > 0.0);
        assert_eq!(rot.rotation().x, 0.0);
    }
}
