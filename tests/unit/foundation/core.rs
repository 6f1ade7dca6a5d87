use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::whole(20).is_ok());
}

#[test]
fn fps_frames_to_secs_matches_integer_rate() {
    let fps = Fps::whole(20).unwrap();
    assert!((fps.frames_to_secs(200) - 10.0).abs() < 1e-12);
    assert_eq!(fps.frame_delay_ms(), (1000, 20));
}

#[test]
fn canvas_validation_bounds() {
    assert!(Canvas::square(600).validate().is_ok());
    assert!(Canvas::square(0).validate().is_err());
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .validate()
        .is_err()
    );
}

#[test]
fn rgba_hex_is_lowercase_rgb() {
    assert_eq!(Rgba8::opaque(255, 165, 0).to_hex(), "#ffa500");
    assert!((Rgba8::new(0, 0, 0, 255).opacity() - 1.0).abs() < 1e-12);
}
