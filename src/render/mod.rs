//! Figure → pixels or vector markup.

/// The backend trait and its output frame.
pub mod backend;
/// `vello_cpu` rasterizer.
pub mod cpu;
pub mod svg;
pub mod text;
