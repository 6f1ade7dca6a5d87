use num::{BigInt, BigRational, Integer, One, Signed, Zero};

use crate::foundation::error::{LissajousError, LissajousResult};

/// Closest fraction to `value` whose denominator does not exceed `max_den`.
///
/// `value` is first converted to the exact rational it represents in binary, then reduced with
/// the bounded continued-fraction expansion. Ties between the two candidate convergents go to the
/// last full convergent. Returns `None` for non-finite input or a zero bound.
pub fn limit_denominator(value: f64, max_den: u32) -> Option<BigRational> {
    if max_den == 0 {
        return None;
    }
    let exact = BigRational::from_float(value)?;
    let max_den = BigInt::from(max_den);
    if exact.denom() <= &max_den {
        return Some(exact);
    }

    let (mut p0, mut q0) = (BigInt::zero(), BigInt::one());
    let (mut p1, mut q1) = (BigInt::one(), BigInt::zero());
    let (mut n, mut d) = (exact.numer().clone(), exact.denom().clone());
    loop {
        let a = n.div_floor(&d);
        let q2 = &q0 + &a * &q1;
        if q2 > max_den {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = std::mem::replace(&mut d, r);
    }

    let k = (&max_den - &q0).div_floor(&q1);
    let semi = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let full = BigRational::new(p1, q1);
    if (&full - &exact).abs() <= (&semi - &exact).abs() {
        Some(full)
    } else {
        Some(semi)
    }
}

/// `n` evenly spaced values over `[start, stop]`, both endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> LissajousResult<Vec<f64>> {
    if n == 0 {
        return Err(LissajousError::invalid("linspace needs at least one sample"));
    }
    if n == 1 {
        return Ok(vec![start]);
    }
    let step = (stop - start) / ((n - 1) as f64);
    let mut out: Vec<f64> = (0..n).map(|i| start + (i as f64) * step).collect();
    // Pin the last sample so the span is exact.
    out[n - 1] = stop;
    Ok(out)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Flatten premultiplied RGBA8 over an opaque background.
pub(crate) fn flatten_premul_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgba: [u8; 4],
) -> LissajousResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(LissajousError::encode(
            "flatten_premul_over_bg_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg_r = bg_rgba[0] as u16;
    let bg_g = bg_rgba[1] as u16;
    let bg_b = bg_rgba[2] as u16;

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        let r = s[0] as u16 + mul_div255_u16(bg_r, inv);
        let g = s[1] as u16 + mul_div255_u16(bg_g, inv);
        let b = s[2] as u16 + mul_div255_u16(bg_b, inv);

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
