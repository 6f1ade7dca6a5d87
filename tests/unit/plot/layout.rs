use super::*;

#[test]
fn single_panel_is_centred_square() {
    let r = single_panel(Canvas::square(600));
    assert!((r.width() - r.height()).abs() < 1e-9);
    assert!((r.x0 - (600.0 - r.x1)).abs() < 1e-9);
    assert!(r.x0 > 0.0 && r.x1 < 600.0);
}

#[test]
fn grid_panels_do_not_overlap_and_fit_canvas() {
    let canvas = Canvas::square(1000);
    let rects: Vec<Rect> = [
        PanelSlot::Centre,
        PanelSlot::Top,
        PanelSlot::Bottom,
        PanelSlot::Left,
        PanelSlot::Right,
    ]
    .iter()
    .map(|&s| grid_panel(canvas, s))
    .collect();

    for r in &rects {
        assert!(r.x0 >= 0.0 && r.y0 >= 0.0 && r.x1 <= 1000.0 && r.y1 <= 1000.0);
    }
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            assert!(a.intersect(*b).area() <= 0.0);
        }
    }
}

#[test]
fn grid_slots_are_arranged_around_centre() {
    let canvas = Canvas::square(900);
    let c = grid_panel(canvas, PanelSlot::Centre);
    let t = grid_panel(canvas, PanelSlot::Top);
    let b = grid_panel(canvas, PanelSlot::Bottom);
    let l = grid_panel(canvas, PanelSlot::Left);
    let r = grid_panel(canvas, PanelSlot::Right);
    assert!(t.y1 < c.y0 && c.y1 < b.y0);
    assert!(l.x1 < c.x0 && c.x1 < r.x0);
    assert_eq!(t.x0, c.x0);
    assert_eq!(l.y0, c.y0);
}
