use crate::foundation::core::Rgba8;

/// Colors, stroke widths and caption size shared by the raster and SVG outputs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Canvas fill.
    pub background: Rgba8,
    /// Grid lines inside each panel.
    pub grid: Rgba8,
    /// Captions and panel borders.
    pub text: Rgba8,
    /// The Lissajous curve.
    pub curve: Rgba8,
    /// x waveform in the five-panel layout.
    pub x_wave: Rgba8,
    /// y waveform in the five-panel layout.
    pub y_wave: Rgba8,
    /// Current-position dot.
    pub marker: Rgba8,
    /// Stroke width of every curve, in pixels.
    pub line_width: f64,
    /// Stroke width of grid lines, in pixels.
    pub grid_width: f64,
    /// Dot radius, in pixels.
    pub marker_radius: f64,
    /// Caption font size, in pixels.
    pub caption_size: f64,
    /// Grid lines per axis, counting both edges.
    pub grid_divisions: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba8::opaque(0, 0, 0),
            grid: Rgba8::new(128, 128, 128, 128),
            text: Rgba8::opaque(255, 255, 255),
            curve: Rgba8::opaque(255, 165, 0),
            x_wave: Rgba8::opaque(0, 0, 255),
            y_wave: Rgba8::opaque(255, 0, 0),
            marker: Rgba8::opaque(255, 255, 255),
            line_width: 2.0,
            grid_width: 0.5,
            marker_radius: 4.0,
            caption_size: 14.0,
            grid_divisions: 8,
        }
    }
}
