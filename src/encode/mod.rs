//! Encoding sinks.
//!
//! Sinks consume rendered frames in increasing frame order. Animations go to GIF, MP4 (through
//! the system `ffmpeg`) or memory; stills go to PNG.

pub mod ffmpeg;
pub mod gif;
/// Still frames as PNG.
pub mod png;
/// The sink trait and the in-memory sink.
pub mod sink;
