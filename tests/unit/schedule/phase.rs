use super::*;

#[test]
fn schedule_is_half_open_and_increasing() {
    let s = PhaseSchedule::new(200).unwrap();
    assert_eq!(s.len(), 200);
    assert_eq!(s.phases()[0], 0.0);
    assert!(s.phases().iter().all(|&p| (0.0..TAU).contains(&p)));
    assert!(s.phases().windows(2).all(|w| w[1] > w[0]));
    // The last phase stops one step short of a full turn.
    let last = *s.phases().last().unwrap();
    assert!((last - (TAU - TAU / 200.0)).abs() < 1e-12);
}

#[test]
fn single_frame_schedule_is_zero() {
    let s = PhaseSchedule::new(1).unwrap();
    assert_eq!(s.phases(), &[0.0]);
}

#[test]
fn zero_frames_is_invalid() {
    let err = PhaseSchedule::new(0).unwrap_err();
    assert!(matches!(err, LissajousError::InvalidParameter(_)));
}

#[test]
fn fixed_plan_repeats_phase() {
    let plan = PhasePlan::new(PhaseSpec::Fixed(0.75), 10).unwrap();
    assert_eq!(plan.phase_at(0).unwrap(), 0.75);
    assert_eq!(plan.phase_at(9).unwrap(), 0.75);
}

#[test]
fn scheduled_plan_rejects_out_of_range_frames() {
    let plan = PhasePlan::new(PhaseSpec::Varying, 4).unwrap();
    assert_eq!(plan.phase_at(2).unwrap(), TAU / 2.0);
    assert!(plan.phase_at(4).is_err());
}
