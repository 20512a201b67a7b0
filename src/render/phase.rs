use std::f64::consts::TAU;

use crate::foundation::core::PhaseIndex;
use crate::foundation::error::{LoopError, LoopResult};

/// Equally spaced phase samples covering exactly one loop period.
///
/// Sample `i` sits at angle `i * k` with `k = 2π * cycles / frames`, so the phase features at a
/// hypothetical sample `frames` coincide with those at sample 0 and the last frame wraps onto the
/// first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseSchedule {
    frames: u32,
    cycles: u32,
}

impl PhaseSchedule {
    /// Create a schedule of `frames` samples making `cycles` full revolutions.
    pub fn new(frames: u32, cycles: u32) -> LoopResult<Self> {
        if frames == 0 {
            return Err(LoopError::invalid_configuration(
                "phase schedule needs at least one frame",
            ));
        }
        if cycles == 0 {
            return Err(LoopError::invalid_configuration(
                "phase schedule needs at least one cycle",
            ));
        }
        Ok(Self { frames, cycles })
    }

    /// Number of samples (and frames) in one loop.
    pub fn frames(self) -> u32 {
        self.frames
    }

    /// Full revolutions per loop.
    pub fn cycles(self) -> u32 {
        self.cycles
    }

    /// Angle advanced per sample.
    pub fn angle_step(self) -> f64 {
        TAU * f64::from(self.cycles) / f64::from(self.frames)
    }

    /// `(cos(theta * k), sin(theta * k))` for sample `theta`.
    ///
    /// Indices past the end are allowed and wrap naturally.
    pub fn phase(self, theta: PhaseIndex) -> (f64, f64) {
        let angle = f64::from(theta.0) * self.angle_step();
        (angle.cos(), angle.sin())
    }

    /// Sample indices in render order.
    pub fn indices(self) -> impl Iterator<Item = PhaseIndex> {
        (0..self.frames).map(PhaseIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/phase.rs"]
mod tests;
