use super::*;
use crate::foundation::core::{Canvas, Rect};
use crate::plot::figure::{FigureBuilder, FigureKind};
use crate::plot::layout::PanelSlot;
use crate::plot::viewport::Viewport;
use crate::sampling::oscillator::{LissajousParams, Oscillator, PhaseSpec};
use crate::schedule::frame::{FrameGeometry, Polyline};

#[test]
fn still_figure_is_a_complete_document() {
    let params = LissajousParams::new(
        Oscillator::new(1.0, 3.0),
        Oscillator::new(2.0, -1.0),
        PhaseSpec::Fixed(0.5),
    );
    let fig = FigureBuilder::new(FigureKind::Still, &params).build(&FrameGeometry::still(&params));
    let svg = figure_to_svg(&fig);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"600\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("fill=\"#000000\""));
    assert!(svg.contains("stroke=\"#ffa500\""));
    assert!(svg.contains(">x = sin(3t)</text>"));
    assert!(svg.contains(">y = 2sin(-t + 0.5)</text>"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn captions_are_escaped() {
    assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
}

#[test]
fn gaps_split_the_path() {
    let fig = Figure {
        canvas: Canvas::square(100),
        theme: Theme::default(),
        panels: vec![Panel {
            slot: PanelSlot::Centre,
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            viewport: Viewport::cartesian(1.0),
            title: None,
            x_label: None,
            y_label: None,
            series: vec![Series::Line {
                points: Polyline::new(vec![
                    Some(Point::new(-0.5, 0.0)),
                    Some(Point::new(0.0, 0.0)),
                    None,
                    Some(Point::new(0.2, 0.2)),
                    Some(Point::new(0.5, 0.5)),
                ]),
                color: Rgba8::opaque(1, 2, 3),
                width: 1.0,
            }],
        }],
    };
    let svg = figure_to_svg(&fig);
    let line = svg
        .lines()
        .find(|l| l.contains("stroke=\"#010203\""))
        .unwrap();
    assert_eq!(line.matches('M').count(), 2);
    assert!(!svg.contains("<text"));
}

#[test]
fn marker_becomes_a_circle() {
    let params = LissajousParams::default();
    let mut geom = FrameGeometry::still(&params);
    geom.marker = Some(Point::new(0.0, 0.0));
    let fig = FigureBuilder::new(FigureKind::Single, &params)
        .with_canvas(Canvas::square(100))
        .build(&geom);
    let svg = figure_to_svg(&fig);
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn numbers_are_compact() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(1.5), "1.5");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(2.346), "2.35");
}
