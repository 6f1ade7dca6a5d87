use super::*;

fn parts(r: &BigRational) -> (i64, i64) {
    use num::ToPrimitive;
    (r.numer().to_i64().unwrap(), r.denom().to_i64().unwrap())
}

#[test]
fn limit_denominator_keeps_small_fractions() {
    let r = limit_denominator(0.5, 1000).unwrap();
    assert_eq!(parts(&r), (1, 2));
    let r = limit_denominator(3.0, 1000).unwrap();
    assert_eq!(parts(&r), (3, 1));
}

#[test]
fn limit_denominator_recovers_two_thirds_from_float() {
    let r = limit_denominator(2.0 / 3.0, 1000).unwrap();
    assert_eq!(parts(&r), (2, 3));
}

#[test]
fn limit_denominator_bounds_pi() {
    let r = limit_denominator(std::f64::consts::PI, 1000).unwrap();
    assert_eq!(parts(&r), (355, 113));
    let r = limit_denominator(std::f64::consts::PI, 100).unwrap();
    assert_eq!(parts(&r), (311, 99));
}

#[test]
fn limit_denominator_sqrt2_stays_under_bound() {
    let r = limit_denominator(std::f64::consts::SQRT_2, 1000).unwrap();
    let (p, q) = parts(&r);
    assert!(q <= 1000);
    assert_eq!((p, q), (1393, 985));
}

#[test]
fn limit_denominator_handles_negative_values() {
    let r = limit_denominator(-2.0 / 3.0, 1000).unwrap();
    assert_eq!(parts(&r), (-2, 3));
}

#[test]
fn limit_denominator_rejects_non_finite_and_zero_bound() {
    assert!(limit_denominator(f64::NAN, 1000).is_none());
    assert!(limit_denominator(f64::INFINITY, 1000).is_none());
    assert!(limit_denominator(0.5, 0).is_none());
}

#[test]
fn linspace_pins_both_endpoints() {
    let v = linspace(0.0, 4.0, 5).unwrap();
    assert_eq!(v, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(linspace(1.0, 2.0, 1).unwrap(), vec![1.0]);
    assert!(linspace(0.0, 1.0, 0).is_err());
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_premul_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg_to_opaque_rgba8(&mut dst, &[0u8; 4], [0, 0, 0, 255]).is_err());
}
