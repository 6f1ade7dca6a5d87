use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: rgba.repeat((w * h) as usize),
    }
}

#[test]
fn encodes_a_looping_gif() {
    let frames = vec![solid(4, 4, [255, 0, 0, 255]), solid(4, 4, [0, 0, 255, 255])];
    let bytes = encode_gif(&frames, Fps::whole(20).unwrap(), [0, 0, 0, 255]).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
    assert_eq!(bytes.last(), Some(&0x3B));
    // NETSCAPE2.0 application extension carries the loop count.
    assert!(bytes.windows(11).any(|w| w == b"NETSCAPE2.0"));
}

#[test]
fn decodes_back_to_the_same_frame_count() {
    use image::AnimationDecoder as _;

    let frames = vec![
        solid(3, 2, [10, 200, 30, 255]),
        solid(3, 2, [0, 0, 0, 255]),
        solid(3, 2, [255, 255, 255, 255]),
    ];
    let bytes = encode_gif(&frames, Fps::whole(10).unwrap(), [0, 0, 0, 255]).unwrap();
    let decoder = image::codecs::gif::GifDecoder::new(std::io::Cursor::new(bytes)).unwrap();
    let decoded = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].buffer().dimensions(), (3, 2));
    let (numer, denom) = decoded[0].delay().numer_denom_ms();
    assert_eq!(numer / denom, 100);
}

#[test]
fn empty_input_is_an_error() {
    assert!(encode_gif(&[], Fps::whole(20).unwrap(), [0, 0, 0, 255]).is_err());
}

#[test]
fn sink_enforces_order_and_single_use() {
    let mut out = Vec::new();
    let mut sink = GifSink::new(&mut out, [0, 0, 0, 255]);
    let cfg = SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::whole(20).unwrap(),
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(1), &solid(2, 2, [0, 0, 0, 255]))
        .unwrap();
    assert!(
        sink.push_frame(FrameIndex(0), &solid(2, 2, [0, 0, 0, 255]))
            .is_err()
    );
    sink.end().unwrap();
    assert!(sink.begin(cfg).is_err());
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_errors_surface_from_end() {
    let mut sink = GifSink::new(BrokenPipe, [0, 0, 0, 255]);
    sink.begin(SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::whole(20).unwrap(),
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &solid(2, 2, [9, 9, 9, 255]))
        .unwrap();
    let err = sink.end().unwrap_err();
    assert!(matches!(err, LissajousError::Encode(_)));
}

#[test]
fn nothing_reaches_the_writer_before_end() {
    let mut out = Vec::new();
    {
        let mut sink = GifSink::new(&mut out, [0, 0, 0, 255]);
        sink.begin(SinkConfig {
            width: 2,
            height: 2,
            fps: Fps::whole(20).unwrap(),
        })
        .unwrap();
        sink.push_frame(FrameIndex(0), &solid(2, 2, [0, 0, 0, 255]))
            .unwrap();
    }
    assert!(out.is_empty());
}
