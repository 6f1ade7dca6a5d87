use crate::foundation::core::{Point, Rect};
use crate::schedule::frame::Polyline;

/// Data-space bounds of a panel. `y` grows upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Viewport {
    /// Bounds as given; an empty span maps to the middle of the panel.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// `[-scale, scale]` on both axes.
    pub fn cartesian(scale: f64) -> Self {
        Self::new(-scale, scale, -scale, scale)
    }

    /// Time horizontally over `[0, half_t]`, amplitude vertically.
    pub fn time_horizontal(scale: f64, half_t: f64) -> Self {
        Self::new(0.0, half_t, -scale, scale)
    }

    /// Amplitude horizontally, time vertically over `[0, half_t]`.
    pub fn time_vertical(scale: f64, half_t: f64) -> Self {
        Self::new(-scale, scale, 0.0, half_t)
    }

    /// `x_max - x_min`.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// `y_max - y_min`.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Map a data point into the pixel rect `px` (pixel y grows downwards).
    pub fn to_pixel(&self, p: Point, px: Rect) -> Point {
        let w = self.width();
        let h = self.height();
        let u = if w != 0.0 { (p.x - self.x_min) / w } else { 0.5 };
        let v = if h != 0.0 { (p.y - self.y_min) / h } else { 0.5 };
        Point::new(px.x0 + u * px.width(), px.y1 - v * px.height())
    }

    /// Evenly spaced grid positions on each axis, edges included.
    pub fn grid_lines(&self, divisions: u32) -> (Vec<f64>, Vec<f64>) {
        let steps = divisions.max(1);
        let xs = (0..=steps)
            .map(|i| self.x_min + self.width() * f64::from(i) / f64::from(steps))
            .collect();
        let ys = (0..=steps)
            .map(|i| self.y_min + self.height() * f64::from(i) / f64::from(steps))
            .collect();
        (xs, ys)
    }
}

/// Clip the segment `a -> b` to `rect` (Liang-Barsky). `None` when fully outside.
pub fn clip_segment(a: Point, b: Point, rect: Rect) -> Option<(Point, Point)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [
        (-dx, a.x - rect.x0),
        (dx, rect.x1 - a.x),
        (-dy, a.y - rect.y0),
        (dy, rect.y1 - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        Point::new(a.x + t0 * dx, a.y + t0 * dy),
        Point::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

/// Pixel-space runs of `points` inside `rect`.
///
/// A run ends at every gap and wherever clipping cuts the line. Each run holds at least two
/// points, so isolated samples draw nothing.
pub(crate) fn pixel_runs(points: &Polyline, vp: &Viewport, rect: Rect) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    for segment in points.segments() {
        let px: Vec<Point> = segment
            .iter()
            .flatten()
            .map(|p| vp.to_pixel(*p, rect))
            .collect();
        let mut run: Vec<Point> = Vec::new();
        for pair in px.windows(2) {
            let Some((a, b)) = clip_segment(pair[0], pair[1], rect) else {
                end_run(&mut runs, &mut run);
                continue;
            };
            if run.last() != Some(&a) {
                end_run(&mut runs, &mut run);
                run.push(a);
            }
            run.push(b);
        }
        end_run(&mut runs, &mut run);
    }
    runs
}

fn end_run(runs: &mut Vec<Vec<Point>>, run: &mut Vec<Point>) {
    if !run.is_empty() {
        runs.push(std::mem::take(run));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/viewport.rs"]
mod tests;
