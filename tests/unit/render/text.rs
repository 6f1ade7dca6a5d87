use super::*;
use crate::foundation::core::Rect;
use crate::plot::layout::PanelSlot;
use crate::plot::viewport::Viewport;

/// A font from the usual system locations; tests that need one skip without it.
fn system_font() -> Option<CaptionFont> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| CaptionFont::from_path(Path::new(p)).ok())
}

#[test]
fn garbage_bytes_are_not_a_font() {
    let font = CaptionFont::from_bytes(b"definitely not a font".to_vec());
    assert!(matches!(
        Captions::new(&font),
        Err(LissajousError::InvalidParameter(_))
    ));
}

#[test]
fn missing_font_file_is_reported() {
    let err = CaptionFont::from_path(Path::new("no/such/dir/font.ttf")).unwrap_err();
    assert!(err.to_string().contains("font.ttf"));
}

#[test]
fn layouts_are_cached_per_caption() {
    let Some(font) = system_font() else {
        return;
    };
    let mut captions = Captions::new(&font).unwrap();
    let white = Rgba8::opaque(255, 255, 255);
    let a = captions.layout("x = sin(3t)", 14.0, white);
    let b = captions.layout("x = sin(3t)", 14.0, white);
    assert!(Arc::ptr_eq(&a, &b));
    assert!(a.width() > 0.0 && a.height() > 0.0);

    let bigger = captions.layout("x = sin(3t)", 28.0, white);
    assert!(bigger.width() > a.width());
}

#[test]
fn captions_land_outside_the_panel() {
    let Some(font) = system_font() else {
        return;
    };
    let panel = Panel {
        slot: PanelSlot::Centre,
        rect: Rect::new(40.0, 40.0, 160.0, 160.0),
        viewport: Viewport::cartesian(1.0),
        title: Some("Lissajous Figure".to_owned()),
        x_label: Some("x = sin(t)".to_owned()),
        y_label: Some("y = sin(t)".to_owned()),
        series: Vec::new(),
    };
    let mut captions = Captions::new(&font).unwrap();
    let mut ctx = vello_cpu::RenderContext::new(200, 200);
    captions.draw_panel(&mut ctx, &panel, &Theme::default());
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(200, 200);
    ctx.render_to_pixmap(&mut pixmap);
    let data = pixmap.data_as_u8_slice();

    let inked = |x: usize, y: usize| data[(y * 200 + x) * 4 + 3] > 0;
    let any_in = |x0: usize, y0: usize, x1: usize, y1: usize| {
        (y0..y1).any(|y| (x0..x1).any(|x| inked(x, y)))
    };
    // Title above, x label below, y label left; nothing inside the panel.
    assert!(any_in(40, 0, 160, 40));
    assert!(any_in(40, 160, 160, 200));
    assert!(any_in(0, 40, 40, 160));
    assert!(!any_in(41, 41, 159, 159));
}
