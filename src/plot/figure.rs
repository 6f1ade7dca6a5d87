use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::plot::label::AxisLabels;
use crate::plot::layout::{PanelSlot, grid_panel, single_panel};
use crate::plot::theme::Theme;
use crate::plot::viewport::Viewport;
use crate::sampling::oscillator::LissajousParams;
use crate::schedule::frame::{FrameGeometry, Polyline};

/// Which output family a figure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// One full trajectory (`SL`).
    Still,
    /// Composite figure alone (`AL`).
    Single,
    /// Composite figure with its two waveforms on four auxiliary panels (`LW`).
    FivePanel,
}

impl FigureKind {
    /// Leading token of generated file names.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::Still => "SL",
            Self::Single => "AL",
            Self::FivePanel => "LW",
        }
    }

    /// Canvas used when none is configured.
    pub fn default_canvas(self) -> Canvas {
        match self {
            Self::Still | Self::Single => Canvas::square(600),
            Self::FivePanel => Canvas::square(1000),
        }
    }
}

/// Something drawn inside a panel, in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Stroked polyline, broken at its gaps.
    Line {
        /// Vertices in data space.
        points: Polyline,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in pixels.
        width: f64,
    },
    /// Filled dot.
    Marker {
        /// Centre in data space.
        at: Point,
        /// Fill color.
        color: Rgba8,
        /// Radius in pixels.
        radius: f64,
    },
}

/// One set of axes: pixel rect, data bounds and what to draw in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Where the panel sits in the grid.
    pub slot: PanelSlot,
    /// Pixel rectangle on the canvas.
    pub rect: Rect,
    /// Data bounds mapped onto `rect`.
    pub viewport: Viewport,
    /// Caption above the panel.
    pub title: Option<String>,
    /// Caption below the panel.
    pub x_label: Option<String>,
    /// Caption along the left edge.
    pub y_label: Option<String>,
    /// Drawn in order.
    pub series: Vec<Series>,
}

/// A complete frame ready for a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Output size.
    pub canvas: Canvas,
    /// Colors and widths.
    pub theme: Theme,
    /// Panels, centre first.
    pub panels: Vec<Panel>,
}

/// Turns per-frame geometry into a drawable [`Figure`]. Building is pure.
#[derive(Clone, Debug)]
pub struct FigureBuilder {
    kind: FigureKind,
    canvas: Canvas,
    theme: Theme,
    labels: AxisLabels,
    scale: f64,
}

impl FigureBuilder {
    /// Builder with the default canvas for `kind` and the default theme. Captions and the
    /// viewport scale come from `params`.
    pub fn new(kind: FigureKind, params: &LissajousParams) -> Self {
        Self {
            kind,
            canvas: kind.default_canvas(),
            theme: Theme::default(),
            labels: AxisLabels::new(params),
            scale: params.viewport_scale(),
        }
    }

    /// Override the canvas.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Override the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Figure family.
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Colors and widths.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Lay out one frame.
    pub fn build(&self, geom: &FrameGeometry) -> Figure {
        let panels = match self.kind {
            FigureKind::Still | FigureKind::Single => vec![self.single(geom)],
            FigureKind::FivePanel => self.five_panel(geom),
        };
        Figure {
            canvas: self.canvas,
            theme: self.theme,
            panels,
        }
    }

    fn curve_series(&self, geom: &FrameGeometry) -> Vec<Series> {
        let mut series = vec![Series::Line {
            points: geom.curve.clone(),
            color: self.theme.curve,
            width: self.theme.line_width,
        }];
        series.extend(geom.marker.map(|at| self.marker(at)));
        series
    }

    fn marker(&self, at: Point) -> Series {
        Series::Marker {
            at,
            color: self.theme.marker,
            radius: self.theme.marker_radius,
        }
    }

    fn single(&self, geom: &FrameGeometry) -> Panel {
        Panel {
            slot: PanelSlot::Centre,
            rect: single_panel(self.canvas),
            viewport: Viewport::cartesian(self.scale),
            title: None,
            x_label: Some(self.labels.x.clone()),
            y_label: Some(self.labels.y.clone()),
            series: self.curve_series(geom),
        }
    }

    fn five_panel(&self, geom: &FrameGeometry) -> Vec<Panel> {
        let mut panels = vec![Panel {
            slot: PanelSlot::Centre,
            rect: grid_panel(self.canvas, PanelSlot::Centre),
            viewport: Viewport::cartesian(self.scale),
            title: Some("Lissajous Figure".to_owned()),
            x_label: None,
            y_label: None,
            series: self.curve_series(geom),
        }];

        let Some(waves) = geom.waves.as_ref() else {
            return panels;
        };

        for slot in [PanelSlot::Top, PanelSlot::Bottom] {
            let mut series = vec![Series::Line {
                points: waves.x_wave.clone(),
                color: self.theme.x_wave,
                width: self.theme.line_width,
            }];
            series.extend(waves.x_marker.map(|at| self.marker(at)));
            panels.push(Panel {
                slot,
                rect: grid_panel(self.canvas, slot),
                viewport: Viewport::time_vertical(self.scale, waves.half_t),
                title: Some(self.labels.x.clone()),
                x_label: None,
                y_label: None,
                series,
            });
        }

        for slot in [PanelSlot::Left, PanelSlot::Right] {
            let mut series = vec![Series::Line {
                points: waves.y_wave.clone(),
                color: self.theme.y_wave,
                width: self.theme.line_width,
            }];
            series.extend(waves.y_marker.map(|at| self.marker(at)));
            panels.push(Panel {
                slot,
                rect: grid_panel(self.canvas, slot),
                viewport: Viewport::time_horizontal(self.scale, waves.half_t),
                title: Some(self.labels.y.clone()),
                x_label: None,
                y_label: None,
                series,
            });
        }

        panels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/figure.rs"]
mod tests;
