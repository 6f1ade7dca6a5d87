use super::*;

#[test]
fn writes_a_readable_png() {
    let dir = std::env::temp_dir().join(format!("lissajous_png_{}", std::process::id()));
    let path = dir.join("nested").join("frame.png");
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 165, 0, 255, 0, 0, 0, 0],
    };
    write_png(&path, &frame, [0, 0, 0, 255]).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 165, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}
