use crate::foundation::error::{LissajousError, LissajousResult};
use crate::foundation::math::linspace;
use crate::sampling::period::joint_period;

/// Number of samples in a time axis unless overridden.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Uniform, immutable sample times spanning `[0, 2T]` for a joint period `T`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxis {
    period: f64,
    samples: Vec<f64>,
}

impl TimeAxis {
    /// [`DEFAULT_SAMPLE_COUNT`] samples over two joint periods.
    pub fn new(period: f64) -> Self {
        Self {
            period,
            samples: two_period_samples(period, DEFAULT_SAMPLE_COUNT),
        }
    }

    /// `n` samples over two joint periods; `n` must be non-zero.
    pub fn with_len(period: f64, n: usize) -> LissajousResult<Self> {
        if n == 0 {
            return Err(LissajousError::invalid("time axis needs at least one sample"));
        }
        Ok(Self {
            period,
            samples: two_period_samples(period, n),
        })
    }

    /// Axis for the joint period of two angular frequencies.
    pub fn for_frequencies(wx: f64, wy: f64) -> Self {
        Self::new(joint_period(wx, wy))
    }

    /// Joint period `T`.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Sample times in increasing order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Last sample time minus the first.
    pub fn span(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Samples rescaled so the whole axis lasts `duration_secs` of animation time.
    ///
    /// A zero-span axis maps every sample to 0.
    pub fn normalized(&self, duration_secs: f64) -> Vec<f64> {
        let span = self.span();
        if span == 0.0 {
            return vec![0.0; self.samples.len()];
        }
        self.samples
            .iter()
            .map(|t| t / span * duration_secs)
            .collect()
    }
}

fn two_period_samples(period: f64, n: usize) -> Vec<f64> {
    // n > 0 is checked by every caller.
    linspace(0.0, 2.0 * period, n).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/time_axis.rs"]
mod tests;
