use crate::foundation::core::{Canvas, Rect};

/// Position of a panel in the figure grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelSlot {
    /// The Lissajous figure itself.
    Centre,
    /// x waveform above the figure, time running upwards.
    Top,
    /// Same x waveform, below the figure.
    Bottom,
    /// y waveform left of the figure, time running to the right.
    Left,
    /// Same y waveform, right of the figure.
    Right,
}

impl PanelSlot {
    /// `(row, col)` in a 3x3 grid.
    fn cell(self) -> (u32, u32) {
        match self {
            Self::Centre => (1, 1),
            Self::Top => (0, 1),
            Self::Bottom => (2, 1),
            Self::Left => (1, 0),
            Self::Right => (1, 2),
        }
    }
}

/// Fraction of the canvas kept free around the panels for captions.
const OUTER_MARGIN: f64 = 0.08;
/// Space between grid cells, as a fraction of one cell.
const CELL_GAP: f64 = 0.25;

/// One square panel filling the canvas inside the outer margin.
pub fn single_panel(canvas: Canvas) -> Rect {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let side = (w.min(h) * (1.0 - 2.0 * OUTER_MARGIN)).max(1.0);
    let x0 = (w - side) / 2.0;
    let y0 = (h - side) / 2.0;
    Rect::new(x0, y0, x0 + side, y0 + side)
}

/// Pixel rect of `slot` in a 3x3 grid with [`CELL_GAP`] spacing.
pub fn grid_panel(canvas: Canvas, slot: PanelSlot) -> Rect {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let (mx, my) = (w * OUTER_MARGIN, h * OUTER_MARGIN);
    let cell_w = (w - 2.0 * mx) / (3.0 + 2.0 * CELL_GAP);
    let cell_h = (h - 2.0 * my) / (3.0 + 2.0 * CELL_GAP);
    let (row, col) = slot.cell();
    let x0 = mx + f64::from(col) * cell_w * (1.0 + CELL_GAP);
    let y0 = my + f64::from(row) * cell_h * (1.0 + CELL_GAP);
    Rect::new(x0, y0, x0 + cell_w, y0 + cell_h)
}

#[cfg(test)]
#[path = "../../tests/unit/plot/layout.rs"]
mod tests;
