//! Fixed-rate simulation stepping
//!
//! Velocities are in field units per frame, so the session must advance at
//! a fixed 60 Hz whatever the display refresh rate is.

use game_core::Params;

pub const SIM_FIXED_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add real elapsed seconds and return how many fixed steps are due.
    /// Long stalls are capped at `Params::MAX_DT`.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);
        let mut steps = 0;
        while self.accumulator >= SIM_FIXED_DT {
            self.accumulator -= SIM_FIXED_DT;
            steps += 1;
        }
        steps
    }
}
