//! Fixed-step driver
//!
//! Accumulates render-frame time and runs [`tick`] at `SIM_DT`, so a run
//! with the same seed and inputs plays out the same regardless of frame rate.

use super::input::FrameInput;
use super::state::GameState;
use super::tick::tick;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FixedStepper {
    accumulator: f32,
    /// Input waiting for the next substep; edges survive frames with no substep
    pending: FrameInput,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one render frame. Returns the number of substeps simulated.
    pub fn advance(&mut self, state: &mut GameState, input: &FrameInput, frame_dt: f32) -> u32 {
        self.pending.merge(input);
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &self.pending, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.pending = self.pending.held_only();
        }

        if self.accumulator >= SIM_DT {
            log::debug!(
                "Dropping {:.1} ms of simulation time",
                self.accumulator * 1000.0
            );
            self.accumulator %= SIM_DT;
        }

        substeps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }
}
