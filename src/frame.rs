//! Frame timing and the fixed-timestep accumulator
//!
//! `FrameTimer` converts wall-clock samples into safe frame deltas;
//! `FixedStep` converts those deltas into a whole number of fixed
//! simulation ticks so the sim stays deterministic regardless of the
//! display refresh rate.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Wall-clock delta tracker. Timestamps are in seconds from any
/// monotonic source.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTimer {
    last: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous sample. The first sample, a backwards
    /// clock, and any gap longer than [`MAX_FRAME_DT`] (a pause or a hung
    /// tab) all yield 0.0 so the sim never jumps.
    pub fn delta(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last = Some(now);
        if dt < 0.0 || dt > MAX_FRAME_DT { 0.0 } else { dt }
    }
}

/// Accumulator that drains frame time in [`SIM_DT`] ticks
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FixedStep {
    accumulator: f64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds and return how many fixed ticks to run now, at
    /// most [`MAX_SUBSTEPS`]. When the cap is hit the leftover time is
    /// dropped rather than banked, so a slow frame cannot start a spiral
    /// of ever-longer catch-up work.
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Interpolation factor in [0, 1): fraction of a tick still pending
    pub fn alpha(&self) -> f64 {
        self.accumulator / SIM_DT
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
