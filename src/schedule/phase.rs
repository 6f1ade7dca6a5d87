use std::f64::consts::TAU;

use crate::foundation::error::{LissajousError, LissajousResult};
use crate::sampling::oscillator::PhaseSpec;

/// One phase value per animation frame, uniformly covering `[0, 2π)`.
///
/// The range is half-open so a looping animation does not show the starting phase twice.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseSchedule {
    phases: Vec<f64>,
}

impl PhaseSchedule {
    /// `2π k / frames` for `k` in `0..frames`.
    pub fn new(frames: u32) -> LissajousResult<Self> {
        if frames == 0 {
            return Err(LissajousError::invalid("phase schedule needs at least one frame"));
        }
        let n = f64::from(frames);
        Ok(Self {
            phases: (0..frames).map(|k| TAU * f64::from(k) / n).collect(),
        })
    }

    /// All phases in frame order.
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    /// Number of frames covered.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Never `true` for a schedule built by [`PhaseSchedule::new`].
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Phase of `frame`, if it is in range.
    pub fn get(&self, frame: u64) -> Option<f64> {
        usize::try_from(frame)
            .ok()
            .and_then(|i| self.phases.get(i).copied())
    }
}

/// Resolves the phase for each frame from a [`PhaseSpec`].
#[derive(Clone, Debug, PartialEq)]
pub enum PhasePlan {
    /// Same phase on every frame.
    Constant(f64),
    /// One phase per frame.
    Scheduled(PhaseSchedule),
}

impl PhasePlan {
    /// Plan for `spec`; a schedule needs at least one frame.
    pub fn new(spec: PhaseSpec, frames: u32) -> LissajousResult<Self> {
        match spec {
            PhaseSpec::Fixed(phi) => Ok(Self::Constant(phi)),
            PhaseSpec::Varying => Ok(Self::Scheduled(PhaseSchedule::new(frames)?)),
        }
    }

    /// Phase of `frame`; out-of-range frames are an error for scheduled phases.
    pub fn phase_at(&self, frame: u64) -> LissajousResult<f64> {
        match self {
            Self::Constant(phi) => Ok(*phi),
            Self::Scheduled(schedule) => schedule.get(frame).ok_or_else(|| {
                LissajousError::invalid(format!(
                    "frame {frame} is outside the {}-frame phase schedule",
                    schedule.len()
                ))
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/phase.rs"]
mod tests;
