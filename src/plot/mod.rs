//! Figure model: panels, viewports, captions and colors.

/// Panels and series built from frame geometry.
pub mod figure;
pub mod label;
/// Panel rectangles on the canvas.
pub mod layout;
/// Colors and stroke widths.
pub mod theme;
/// Data-to-pixel mapping.
pub mod viewport;
