use super::*;

#[test]
fn formats_know_their_extension() {
    assert_eq!(OutputFormat::Png.extension(), "png");
    assert_eq!(OutputFormat::Mp4.extension(), "mp4");
    assert!(OutputFormat::Gif.is_animated());
    assert!(!OutputFormat::Svg.is_animated());
    assert_eq!(OutputFormat::from_path(Path::new("a/b.GIF")), Some(OutputFormat::Gif));
    assert_eq!(OutputFormat::from_path(Path::new("a/b.txt")), None);
    assert_eq!(OutputFormat::from_path(Path::new("a/b")), None);
}

#[test]
fn targets_resolve_paths() {
    let dir = OutputTarget::Dir {
        dir: PathBuf::from("out"),
        format: OutputFormat::Gif,
    };
    assert_eq!(
        dir.resolve(|ext| format!("AL.{ext}")),
        Some(PathBuf::from("out").join("AL.gif"))
    );

    let file = OutputTarget::File {
        path: PathBuf::from("x.mp4"),
        format: OutputFormat::Mp4,
    };
    assert_eq!(file.resolve(|_| unreachable!()), Some(PathBuf::from("x.mp4")));
    assert_eq!(file.format(), Some(OutputFormat::Mp4));

    assert_eq!(OutputTarget::Embed.resolve(|_| unreachable!()), None);
    assert_eq!(OutputTarget::Embed.format(), None);
}

#[test]
fn animation_reports_timing_and_encodes() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: [0, 0, 0, 255].repeat(4),
    };
    let anim = Animation::new(
        vec![frame.clone(), frame],
        Fps::whole(4).unwrap(),
        Rgba8::opaque(0, 0, 0),
    );
    assert_eq!(anim.len(), 2);
    assert!(!anim.is_empty());
    assert_eq!(anim.duration_secs(), 0.5);
    assert!(anim.to_gif_bytes().unwrap().starts_with(b"GIF89a"));

    let rendered = Rendered::Embedded(anim);
    assert!(rendered.path().is_none());
    assert_eq!(rendered.animation().map(Animation::len), Some(2));
}

#[test]
fn empty_animation_cannot_be_written() {
    let anim = Animation::new(Vec::new(), Fps::whole(4).unwrap(), Rgba8::opaque(0, 0, 0));
    assert!(anim.write_gif(Path::new("never.gif")).is_err());
}
