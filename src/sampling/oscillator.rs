use crate::foundation::error::{LissajousError, LissajousResult};
use crate::sampling::time_axis::TimeAxis;

/// One axis of the figure: `amplitude * sin(angular_frequency * t + phase)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Peak value.
    pub amplitude: f64,
    /// Radians per unit of time.
    pub angular_frequency: f64,
}

impl Oscillator {
    /// Oscillator from its two coefficients.
    pub const fn new(amplitude: f64, angular_frequency: f64) -> Self {
        Self {
            amplitude,
            angular_frequency,
        }
    }

    /// Value at time `t` with an added phase offset.
    #[inline]
    pub fn eval(&self, t: f64, phase: f64) -> f64 {
        self.amplitude * (self.angular_frequency * t + phase).sin()
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Phase offset carried by the y oscillator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseSpec {
    /// The same phase on every frame.
    Fixed(f64),
    /// Phase follows the per-frame [`PhaseSchedule`](crate::PhaseSchedule).
    Varying,
}

impl PhaseSpec {
    /// `true` for [`PhaseSpec::Varying`].
    pub fn is_varying(self) -> bool {
        matches!(self, Self::Varying)
    }

    /// Phase used when no schedule applies (stills, or the first frame).
    pub fn base(self) -> f64 {
        match self {
            Self::Fixed(phi) => phi,
            Self::Varying => 0.0,
        }
    }
}

impl Default for PhaseSpec {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

/// Parameters of a Lissajous figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LissajousParams {
    /// Horizontal oscillator; never phase shifted.
    pub x: Oscillator,
    /// Vertical oscillator.
    pub y: Oscillator,
    /// Phase offset of `y`.
    pub phase: PhaseSpec,
}

impl LissajousParams {
    /// Parameters from both oscillators and the phase mode.
    pub fn new(x: Oscillator, y: Oscillator, phase: PhaseSpec) -> Self {
        Self { x, y, phase }
    }

    /// Half-width of the Cartesian viewport: `1.2 * max(|amp_x|, |amp_y|)`.
    pub fn viewport_scale(&self) -> f64 {
        let max_amp = self.x.amplitude.abs().max(self.y.amplitude.abs());
        if max_amp > 0.0 { 1.2 * max_amp } else { 1.2 }
    }

    /// Reject configurations that could only come from a broken config file.
    ///
    /// Numeric values are otherwise passed through untouched; the sampling code propagates
    /// non-finite values instead of sanitizing them.
    pub fn validate_for_render(&self) -> LissajousResult<()> {
        let values = [
            ("x amplitude", self.x.amplitude),
            ("x frequency", self.x.angular_frequency),
            ("y amplitude", self.y.amplitude),
            ("y frequency", self.y.angular_frequency),
            ("phase", self.phase.base()),
        ];
        for (name, v) in values {
            if !v.is_finite() {
                return Err(LissajousError::invalid(format!("{name} must be finite, got {v}")));
            }
        }
        Ok(())
    }
}

/// Coordinates of the figure at every time-axis sample for one phase value.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Phase the `y` values were evaluated with.
    pub phase: f64,
    /// One value per sample.
    pub x: Vec<f64>,
    /// One value per sample.
    pub y: Vec<f64>,
}

impl Trajectory {
    /// Sample both oscillators on `axis`.
    pub fn evaluate(params: &LissajousParams, axis: &TimeAxis, phase: f64) -> Self {
        let t = axis.samples();
        Self {
            phase,
            x: t.iter().map(|&t| params.x.eval(t, 0.0)).collect(),
            y: t.iter().map(|&t| params.y.eval(t, phase)).collect(),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample `i` as a point, if it exists.
    pub fn point(&self, i: usize) -> Option<kurbo::Point> {
        Some(kurbo::Point::new(*self.x.get(i)?, *self.y.get(i)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/oscillator.rs"]
mod tests;
