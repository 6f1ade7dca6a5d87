use super::*;
use crate::sampling::oscillator::PhaseSpec;

#[test]
fn defaults_match_the_documented_values() {
    let opts = AnimationOpts::default();
    assert!(!opts.draw);
    assert!(!opts.show_dot);
    assert_eq!(opts.frames, 200);
    assert_eq!(opts.fps, 20);
    assert_eq!(opts.canvas, None);
    assert_eq!(opts.fps().unwrap(), Fps::whole(20).unwrap());
    RenderConfig::default().validate().unwrap();
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg = RenderConfig::from_json_str(
        r#"{
            "params": { "y": { "amplitude": 2.0, "angular_frequency": 3.0 }, "phase": "varying" },
            "animation": { "draw": true, "frames": 120, "canvas": { "width": 320, "height": 240 } }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.params.x.amplitude, 1.0);
    assert_eq!(cfg.params.y.angular_frequency, 3.0);
    assert_eq!(cfg.params.phase, PhaseSpec::Varying);
    assert!(cfg.animation.draw);
    assert_eq!(cfg.animation.frames, 120);
    assert_eq!(cfg.animation.fps, 20);
    assert_eq!(cfg.animation.canvas, Some(Canvas { width: 320, height: 240 }));
    cfg.validate().unwrap();
}

#[test]
fn fixed_phase_round_trips_through_json() {
    let mut cfg = RenderConfig::default();
    cfg.params.phase = PhaseSpec::Fixed(0.5);
    let text = cfg.to_json_pretty().unwrap();
    assert!(text.contains("\"fixed\": 0.5"));
    assert_eq!(RenderConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn validation_rejects_bad_values() {
    let zero_frames = AnimationOpts {
        frames: 0,
        ..AnimationOpts::default()
    };
    assert!(zero_frames.validate().is_err());

    let zero_fps = AnimationOpts {
        fps: 0,
        ..AnimationOpts::default()
    };
    assert!(zero_fps.validate().is_err());

    let empty_canvas = StillOpts {
        canvas: Some(Canvas::square(0)),
        ..StillOpts::default()
    };
    assert!(empty_canvas.validate().is_err());

    let no_caption = StillOpts {
        theme: Theme {
            caption_size: 0.0,
            ..Theme::default()
        },
        ..StillOpts::default()
    };
    assert!(no_caption.validate().is_err());

    let mut cfg = RenderConfig::default();
    cfg.params.y.angular_frequency = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn font_paths_are_read_from_json() {
    let cfg = RenderConfig::from_json_str(
        r#"{ "still": { "font": "fonts/caption.ttf" }, "animation": { "fps": 10 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.still.font, Some(PathBuf::from("fonts/caption.ttf")));
    assert_eq!(cfg.animation.font, None);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RenderConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LissajousError::Serde(_)));
}
