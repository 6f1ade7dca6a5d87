//! Vector output of a [`Figure`], including captions.

use std::fmt::Write as _;

use crate::foundation::core::{Point, Rgba8};
use crate::plot::figure::{Figure, Panel, Series};
use crate::plot::theme::Theme;
use crate::plot::viewport::pixel_runs;

/// Serialize `figure` as a standalone SVG document.
pub fn figure_to_svg(figure: &Figure) -> String {
    let (w, h) = (figure.canvas.width, figure.canvas.height);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" {}/>"#,
        fill_attrs(figure.theme.background)
    );
    for panel in &figure.panels {
        write_panel(&mut out, panel, &figure.theme);
    }
    out.push_str("</svg>\n");
    out
}

fn write_panel(out: &mut String, panel: &Panel, theme: &Theme) {
    let r = panel.rect;
    let vp = &panel.viewport;
    let _ = writeln!(out, "  <g>");

    let (xs, ys) = vp.grid_lines(theme.grid_divisions);
    let mut d = String::new();
    for x in xs {
        let a = vp.to_pixel(Point::new(x, vp.y_min), r);
        let b = vp.to_pixel(Point::new(x, vp.y_max), r);
        push_line(&mut d, a, b);
    }
    for y in ys {
        let a = vp.to_pixel(Point::new(vp.x_min, y), r);
        let b = vp.to_pixel(Point::new(vp.x_max, y), r);
        push_line(&mut d, a, b);
    }
    let _ = writeln!(
        out,
        r#"    <path d="{}" fill="none" {} stroke-width="{}"/>"#,
        d.trim_end(),
        stroke_attrs(theme.grid),
        num(theme.grid_width)
    );
    let _ = writeln!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}" fill="none" {} stroke-width="1"/>"#,
        num(r.x0),
        num(r.y0),
        num(r.width()),
        num(r.height()),
        stroke_attrs(theme.text)
    );

    for series in &panel.series {
        match series {
            Series::Line {
                points,
                color,
                width,
            } => {
                let mut d = String::new();
                for run in pixel_runs(points, vp, r) {
                    for (i, p) in run.iter().enumerate() {
                        let cmd = if i == 0 { 'M' } else { 'L' };
                        let _ = write!(d, "{cmd}{} {} ", num(p.x), num(p.y));
                    }
                }
                if d.is_empty() {
                    continue;
                }
                let _ = writeln!(
                    out,
                    r#"    <path d="{}" fill="none" {} stroke-width="{}" stroke-linejoin="round" stroke-linecap="round"/>"#,
                    d.trim_end(),
                    stroke_attrs(*color),
                    num(*width)
                );
            }
            Series::Marker { at, color, radius } => {
                let c = vp.to_pixel(*at, r);
                if !r.contains(c) {
                    continue;
                }
                let _ = writeln!(
                    out,
                    r#"    <circle cx="{}" cy="{}" r="{}" {}/>"#,
                    num(c.x),
                    num(c.y),
                    num(*radius),
                    fill_attrs(*color)
                );
            }
        }
    }

    let text = fill_attrs(theme.text);
    let size = theme.caption_size;
    let mid_x = (r.x0 + r.x1) / 2.0;
    let mid_y = (r.y0 + r.y1) / 2.0;
    if let Some(title) = &panel.title {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" font-size="{}" text-anchor="middle" {text}>{}</text>"#,
            num(mid_x),
            num(r.y0 - size * 0.6),
            num(size),
            escape_xml(title)
        );
    }
    if let Some(label) = &panel.x_label {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" font-size="{}" text-anchor="middle" {text}>{}</text>"#,
            num(mid_x),
            num(r.y1 + size * 1.6),
            num(size),
            escape_xml(label)
        );
    }
    if let Some(label) = &panel.y_label {
        let x = r.x0 - size;
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{}" font-size="{}" text-anchor="middle" transform="rotate(-90 {} {})" {text}>{}</text>"#,
            num(x),
            num(mid_y),
            num(size),
            num(x),
            num(mid_y),
            escape_xml(label)
        );
    }

    let _ = writeln!(out, "  </g>");
}

fn push_line(d: &mut String, a: Point, b: Point) {
    let _ = write!(d, "M{} {} L{} {} ", num(a.x), num(a.y), num(b.x), num(b.y));
}

fn fill_attrs(c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#"fill="{}""#, c.to_hex())
    } else {
        format!(r#"fill="{}" fill-opacity="{}""#, c.to_hex(), num(c.opacity()))
    }
}

fn stroke_attrs(c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#"stroke="{}""#, c.to_hex())
    } else {
        format!(r#"stroke="{}" stroke-opacity="{}""#, c.to_hex(), num(c.opacity()))
    }
}

/// Compact decimal with at most two fractional digits.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
