use super::*;
use crate::foundation::core::Canvas;
use crate::sampling::oscillator::Oscillator;

fn small_opts(frames: u32) -> AnimationOpts {
    AnimationOpts {
        frames,
        fps: 10,
        canvas: Some(Canvas::square(48)),
        ..AnimationOpts::default()
    }
}

fn tmp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lissajous_session_{tag}_{}", std::process::id()))
}

#[test]
fn embedded_animation_keeps_every_frame() {
    let params = LissajousParams::new(
        Oscillator::new(1.0, 2.0),
        Oscillator::new(1.0, 3.0),
        PhaseSpec::Varying,
    );
    let rendered = render_animation(&params, &small_opts(4), &OutputTarget::Embed).unwrap();
    let anim = rendered.animation().unwrap();
    assert_eq!(anim.len(), 4);
    assert_eq!(anim.fps().as_f64(), 10.0);
    assert!(anim.frames().iter().all(|f| f.width == 48 && f.height == 48));
    // The phase moves, so consecutive frames differ.
    assert_ne!(anim.frames()[0], anim.frames()[1]);
}

#[test]
fn waves_animation_uses_the_requested_canvas() {
    let opts = AnimationOpts {
        show_dot: true,
        draw: true,
        ..small_opts(3)
    };
    let rendered = render_waves(&LissajousParams::default(), &opts, &OutputTarget::Embed).unwrap();
    let anim = rendered.animation().unwrap();
    assert_eq!(anim.len(), 3);
    assert_eq!((anim.frames()[0].width, anim.frames()[0].height), (48, 48));
}

#[test]
fn session_renders_frames_on_demand() {
    let mut session =
        AnimationSession::new(FigureKind::Single, &LissajousParams::default(), &small_opts(5))
            .unwrap();
    assert_eq!(session.frame_count(), 5);
    assert_eq!(session.sink_config().width, 48);
    let a = session.render_frame(FrameIndex(2)).unwrap();
    let b = session.render_frame(FrameIndex(2)).unwrap();
    assert_eq!(a, b);
    assert!(session.render_frame(FrameIndex(5)).is_err());
    assert!(
        AnimationSession::new(FigureKind::Still, &LissajousParams::default(), &small_opts(5))
            .is_err()
    );
}

#[test]
fn gif_file_gets_an_automatic_name() {
    let dir = tmp_dir("gif");
    let target = OutputTarget::Dir {
        dir: dir.clone(),
        format: OutputFormat::Gif,
    };
    let rendered = render_animation(&LissajousParams::default(), &small_opts(2), &target).unwrap();
    let path = rendered.path().unwrap().to_path_buf();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("AL-1-1-1-1-0-false-false-false-2-10.gif")
    );
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn stills_are_written_as_png_or_svg() {
    let dir = tmp_dir("still");
    let params = LissajousParams::new(
        Oscillator::new(1.0, 3.0),
        Oscillator::new(1.0, 2.0),
        PhaseSpec::Varying,
    );
    let opts = StillOpts {
        canvas: Some(Canvas::square(40)),
        ..StillOpts::default()
    };

    let png = render_still(
        &params,
        &opts,
        &OutputTarget::Dir {
            dir: dir.clone(),
            format: OutputFormat::Png,
        },
    )
    .unwrap();
    // A varying phase is drawn at phase 0.
    assert_eq!(
        png.file_name().and_then(|n| n.to_str()),
        Some("SL-1-3-1-2-0.png")
    );
    let img = image::open(&png).unwrap();
    assert_eq!((img.width(), img.height()), (40, 40));

    let svg_path = dir.join("explicit.svg");
    let svg = render_still(
        &params,
        &opts,
        &OutputTarget::File {
            path: svg_path.clone(),
            format: OutputFormat::Svg,
        },
    )
    .unwrap();
    assert_eq!(svg, svg_path);
    let text = std::fs::read_to_string(&svg).unwrap();
    assert!(text.contains("y = sin(2t)"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn still_frame_matches_the_written_png_size() {
    let frame = render_still_frame(
        &LissajousParams::default(),
        &StillOpts {
            canvas: Some(Canvas {
                width: 30,
                height: 20,
            }),
            ..StillOpts::default()
        },
    )
    .unwrap();
    assert_eq!((frame.width, frame.height), (30, 20));
}

#[test]
fn mismatched_formats_and_targets_are_rejected() {
    let params = LissajousParams::default();
    let png_target = OutputTarget::Dir {
        dir: tmp_dir("never"),
        format: OutputFormat::Png,
    };
    let gif_target = OutputTarget::Dir {
        dir: tmp_dir("never"),
        format: OutputFormat::Gif,
    };
    assert!(render_animation(&params, &small_opts(2), &png_target).is_err());
    assert!(render_still(&params, &StillOpts::default(), &gif_target).is_err());
    assert!(render_still(&params, &StillOpts::default(), &OutputTarget::Embed).is_err());
    assert!(!tmp_dir("never").exists());
}

#[test]
fn invalid_parameters_are_rejected_before_rendering() {
    let mut params = LissajousParams::default();
    assert!(render_animation(&params, &small_opts(0), &OutputTarget::Embed).is_err());

    params.x.angular_frequency = f64::INFINITY;
    let err = render_animation(&params, &small_opts(2), &OutputTarget::Embed).unwrap_err();
    assert!(matches!(err, LissajousError::InvalidParameter(_)));
}

#[test]
fn configured_font_is_loaded_before_rendering() {
    let missing = PathBuf::from("/nonexistent/lissajous-caption.ttf");
    let still = StillOpts {
        canvas: Some(Canvas::square(40)),
        font: Some(missing.clone()),
        ..StillOpts::default()
    };
    let err = render_still_frame(&LissajousParams::default(), &still).unwrap_err();
    assert!(err.to_string().contains("lissajous-caption.ttf"));

    let anim = AnimationOpts {
        font: Some(missing),
        ..small_opts(2)
    };
    assert!(AnimationSession::new(FigureKind::Single, &LissajousParams::default(), &anim).is_err());
}

#[test]
fn captioned_stills_differ_from_plain_ones() {
    let font = PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
    if !font.exists() {
        return;
    }
    let plain = StillOpts {
        canvas: Some(Canvas::square(200)),
        ..StillOpts::default()
    };
    let captioned = StillOpts {
        font: Some(font),
        ..plain.clone()
    };
    let params = LissajousParams::default();
    assert_ne!(
        render_still_frame(&params, &plain).unwrap(),
        render_still_frame(&params, &captioned).unwrap()
    );
}
