use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::plot::figure::{Figure, Panel, Series};
use crate::plot::theme::Theme;
use crate::plot::viewport::pixel_runs;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::text::{CaptionFont, Captions};
use crate::schedule::frame::Polyline;

/// CPU rasterizer on top of `vello_cpu`.
///
/// Output is premultiplied RGBA8. The background is opaque, so every pixel ends up with
/// alpha 255. Titles and axis labels are only drawn by a backend built with
/// [`CpuBackend::with_font`].
#[derive(Default)]
pub struct CpuBackend {
    pixmap: Option<CpuSurface>,
    captions: Option<Captions>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    /// Backend without captions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that also draws panel titles and axis labels with `font`.
    pub fn with_font(font: &CaptionFont) -> LissajousResult<Self> {
        Ok(Self {
            pixmap: None,
            captions: Some(Captions::new(font)?),
        })
    }

    /// `true` when this backend was built with a caption font.
    pub fn draws_captions(&self) -> bool {
        self.captions.is_some()
    }

    fn pixmap_for(&mut self, width: u16, height: u16) -> &mut vello_cpu::Pixmap {
        let stale = self
            .pixmap
            .as_ref()
            .is_none_or(|s| s.width != width || s.height != height);
        if stale {
            self.pixmap = None;
        }
        &mut self
            .pixmap
            .get_or_insert_with(|| CpuSurface {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
            })
            .pixmap
    }
}

impl RenderBackend for CpuBackend {
    fn render(&mut self, figure: &Figure) -> LissajousResult<FrameRGBA> {
        let width: u16 = figure
            .canvas
            .width
            .try_into()
            .map_err(|_| LissajousError::render("canvas width exceeds u16"))?;
        let height: u16 = figure
            .canvas
            .height
            .try_into()
            .map_err(|_| LissajousError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(LissajousError::render("canvas width/height must be non-zero"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint(cpu_color(figure.theme.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        for panel in &figure.panels {
            draw_panel(&mut ctx, panel, &figure.theme);
            if let Some(captions) = self.captions.as_mut() {
                captions.draw_panel(&mut ctx, panel, &figure.theme);
            }
        }

        ctx.flush();
        let pixmap = self.pixmap_for(width, height);
        ctx.render_to_pixmap(pixmap);

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

fn draw_panel(ctx: &mut vello_cpu::RenderContext, panel: &Panel, theme: &Theme) {
    let rect = panel.rect;
    let vp = &panel.viewport;

    let (xs, ys) = vp.grid_lines(theme.grid_divisions);
    let mut grid = vello_cpu::kurbo::BezPath::new();
    for x in xs {
        let a = vp.to_pixel(Point::new(x, vp.y_min), rect);
        let b = vp.to_pixel(Point::new(x, vp.y_max), rect);
        grid.move_to(point_to_cpu(a));
        grid.line_to(point_to_cpu(b));
    }
    for y in ys {
        let a = vp.to_pixel(Point::new(vp.x_min, y), rect);
        let b = vp.to_pixel(Point::new(vp.x_max, y), rect);
        grid.move_to(point_to_cpu(a));
        grid.line_to(point_to_cpu(b));
    }
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(theme.grid_width));
    ctx.set_paint(cpu_color(theme.grid));
    ctx.stroke_path(&grid);

    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(1.0));
    ctx.set_paint(cpu_color(theme.text));
    ctx.stroke_path(&rect_to_cpu(rect).to_path(0.1));

    for series in &panel.series {
        match series {
            Series::Line {
                points,
                color,
                width,
            } => {
                let path = polyline_path(points, panel);
                if path.elements().is_empty() {
                    continue;
                }
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.set_paint(cpu_color(*color));
                ctx.stroke_path(&path);
            }
            Series::Marker { at, color, radius } => {
                let c = vp.to_pixel(*at, rect);
                if !rect.contains(c) {
                    continue;
                }
                ctx.set_paint(cpu_color(*color));
                ctx.fill_path(&vello_cpu::kurbo::Circle::new(point_to_cpu(c), *radius).to_path(0.1));
            }
        }
    }
}

/// Pixel-space path of a polyline, split at gaps and clipped to the panel.
pub(crate) fn polyline_path(points: &Polyline, panel: &Panel) -> vello_cpu::kurbo::BezPath {
    let mut path = vello_cpu::kurbo::BezPath::new();
    for run in pixel_runs(points, &panel.viewport, panel.rect) {
        let mut run = run.into_iter().map(point_to_cpu);
        if let Some(start) = run.next() {
            path.move_to(start);
        }
        for p in run {
            path.line_to(p);
        }
    }
    path
}

fn cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
