//! Axis and panel captions, e.g. `x = 2sin(3t)` or `y = sin(2t + φ(t))`.

use crate::sampling::oscillator::{LissajousParams, Oscillator, PhaseSpec};

/// Round to three decimals and drop trailing zeros (`1.50 -> "1.5"`, `2.0 -> "2"`).
pub fn format_number(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}

/// Coefficient in front of a term: hidden for 1, a bare sign for -1.
pub fn format_coeff(v: f64) -> String {
    if v == 1.0 {
        return String::new();
    }
    if v == -1.0 {
        return "-".to_owned();
    }
    format_number(v)
}

/// Phase suffix inside the y sine argument.
pub fn format_phase(phase: PhaseSpec) -> String {
    match phase {
        PhaseSpec::Varying => " + φ(t)".to_owned(),
        PhaseSpec::Fixed(phi) if phi == 0.0 => String::new(),
        PhaseSpec::Fixed(phi) if phi < 0.0 => format!(" - {}", format_number(-phi)),
        PhaseSpec::Fixed(phi) => format!(" + {}", format_number(phi)),
    }
}

fn sine_term(axis: char, osc: &Oscillator, phase: &str) -> String {
    format!(
        "{axis} = {}sin({}t{phase})",
        format_coeff(osc.amplitude),
        format_coeff(osc.angular_frequency)
    )
}

/// Captions for the two oscillators of a figure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisLabels {
    /// e.g. `x = 2sin(3t)`.
    pub x: String,
    /// e.g. `y = sin(2t + π/2)`.
    pub y: String,
}

impl AxisLabels {
    /// Captions for `params`.
    pub fn new(params: &LissajousParams) -> Self {
        Self {
            x: sine_term('x', &params.x, ""),
            y: sine_term('y', &params.y, &format_phase(params.phase)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/label.rs"]
mod tests;
