//! Lissajous figure sampling and rendering.
//!
//! Pipeline:
//!
//! - Derive the joint period of the two oscillators ([`joint_period`])
//! - Sample two periods into a [`TimeAxis`]
//! - Resolve per-frame state (phase, time index, draw/erase window) and compute fresh geometry
//!   with the pure [`FrameUpdater`]
//! - Lay the geometry out as a [`Figure`] and rasterize it on the CPU ([`CpuBackend`]), or write
//!   it as SVG
//! - Stream frames into a [`FrameSink`]: GIF, MP4 through the system `ffmpeg`, or memory
//!
//! The [`session`] entry points ([`render_still`], [`render_animation`], [`render_waves`]) wire
//! these steps together.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
pub(crate) mod sampling;
pub(crate) mod schedule;

/// Serializable render settings.
pub mod config;
/// Encoding sinks.
pub mod encode;
/// Figure model.
pub mod plot;
/// Rasterizer and SVG writer.
pub mod render;
/// Entry points.
pub mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Rgba8};
pub use crate::foundation::error::{LissajousError, LissajousResult};
pub use crate::foundation::math::{limit_denominator, linspace};

pub use crate::sampling::oscillator::{LissajousParams, Oscillator, PhaseSpec, Trajectory};
pub use crate::sampling::period::{MAX_RATIO_DENOMINATOR, joint_period};
pub use crate::sampling::time_axis::{DEFAULT_SAMPLE_COUNT, TimeAxis};
pub use crate::schedule::frame::{
    FrameGeometry, FrameState, FrameUpdater, Polyline, ScheduleOpts, WaveProjections, Window,
    frame_to_index, wrap_with_gaps,
};
pub use crate::schedule::phase::{PhasePlan, PhaseSchedule};

pub use crate::config::{AnimationOpts, RenderConfig, StillOpts};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::gif::{GifSink, encode_gif};
pub use crate::encode::png::write_png;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::plot::figure::{Figure, FigureBuilder, FigureKind, Panel, Series};
pub use crate::plot::theme::Theme;
pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::svg::figure_to_svg;
pub use crate::render::text::CaptionFont;
pub use crate::session::naming::file_name;
pub use crate::session::output::{Animation, OutputFormat, OutputTarget, Rendered};
pub use crate::session::render::{
    AnimationSession, render_animation, render_still, render_still_frame, render_waves,
};
