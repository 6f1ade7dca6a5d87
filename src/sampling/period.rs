use std::f64::consts::TAU;

use num::{ToPrimitive, Zero};

use crate::foundation::math::limit_denominator;

/// Largest denominator accepted when approximating the frequency ratio.
pub const MAX_RATIO_DENOMINATOR: u32 = 1000;

/// Time span over which the combined motion of two sinusoids repeats.
///
/// The ratio `wx / wy` is replaced by its closest fraction `p/q` with `q <= 1000` and the period
/// is `2π p / wx`. For irrational ratios this is a periodic surrogate, not the true period, and
/// a ratio with a large numerator yields a long window.
///
/// A zero frequency on either axis returns `2π`, as does a ratio that approximates to `0/1` and
/// a period too long to represent as a finite `f64`. Non-finite frequencies propagate as NaN.
pub fn joint_period(wx: f64, wy: f64) -> f64 {
    if wx == 0.0 || wy == 0.0 {
        return TAU;
    }

    if !wx.is_finite() || !wy.is_finite() {
        return f64::NAN;
    }

    let ratio = wx / wy;
    if ratio.is_infinite() {
        // Ratio overflowed; the x oscillator is so fast that y's period dominates.
        return finite_or_fallback((TAU / wy).abs());
    }

    let Some(approx) = limit_denominator(ratio, MAX_RATIO_DENOMINATOR) else {
        return f64::NAN;
    };
    if approx.numer().is_zero() {
        return TAU;
    }

    let p = approx.numer().to_f64().unwrap_or(f64::NAN);
    let period = finite_or_fallback((TAU * p / wx).abs());
    tracing::trace!(wx, wy, p, period, "joint period");
    period
}

/// Subnormal frequencies can push the period past `f64::MAX`.
fn finite_or_fallback(period: f64) -> f64 {
    if period.is_finite() {
        period
    } else {
        tracing::warn!("joint period overflowed, using 2π");
        TAU
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/period.rs"]
mod tests;
