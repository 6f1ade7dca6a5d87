use std::path::{Path, PathBuf};

use crate::config::{AnimationOpts, StillOpts};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::gif::GifSink;
use crate::encode::png::write_png;
use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::core::{FrameIndex, Rgba8};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::plot::figure::{FigureBuilder, FigureKind};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::CpuBackend;
use crate::render::svg::figure_to_svg;
use crate::render::text::CaptionFont;
use crate::sampling::oscillator::{LissajousParams, PhaseSpec};
use crate::schedule::frame::{FrameGeometry, FrameUpdater};
use crate::session::naming::file_name;
use crate::session::output::{Animation, OutputFormat, OutputTarget, Rendered, write_bytes};

/// Frame-by-frame renderer for one animation.
///
/// Construction derives the period, time axis and phase plan once; every frame after that is a
/// pure update followed by rasterization.
pub struct AnimationSession {
    updater: FrameUpdater,
    builder: FigureBuilder,
    backend: CpuBackend,
}

impl AnimationSession {
    /// Validate inputs and prepare the schedule for a [`FigureKind::Single`] or
    /// [`FigureKind::FivePanel`] animation. Loads the caption font when one is configured.
    pub fn new(
        kind: FigureKind,
        params: &LissajousParams,
        opts: &AnimationOpts,
    ) -> LissajousResult<Self> {
        if kind == FigureKind::Still {
            return Err(LissajousError::invalid(
                "stills are rendered with render_still, not an animation session",
            ));
        }
        params.validate_for_render()?;
        opts.validate()?;

        let waves = kind == FigureKind::FivePanel;
        let updater = FrameUpdater::new(*params, opts.schedule_opts(waves)?)?;
        let builder = FigureBuilder::new(kind, params)
            .with_canvas(opts.canvas.unwrap_or(kind.default_canvas()))
            .with_theme(opts.theme);
        Ok(Self {
            updater,
            builder,
            backend: backend_for(opts.font.as_deref())?,
        })
    }

    /// Number of frames in the animation.
    pub fn frame_count(&self) -> u32 {
        self.updater.frame_count()
    }

    /// The pure per-frame scheduler behind this session.
    pub fn updater(&self) -> &FrameUpdater {
        &self.updater
    }

    /// Frame size and rate handed to sinks.
    pub fn sink_config(&self) -> SinkConfig {
        let canvas = self.builder.canvas();
        SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.updater.opts().fps,
        }
    }

    /// Geometry for one frame.
    pub fn geometry(&self, frame: FrameIndex) -> LissajousResult<FrameGeometry> {
        self.updater.geometry(frame)
    }

    /// Rasterize one frame.
    pub fn render_frame(&mut self, frame: FrameIndex) -> LissajousResult<FrameRGBA> {
        let geom = self.updater.geometry(frame)?;
        let figure = self.builder.build(&geom);
        self.backend.render(&figure)
    }

    /// Render every frame in order and stream it into `sink`.
    pub fn render_all(&mut self, sink: &mut dyn FrameSink) -> LissajousResult<()> {
        sink.begin(self.sink_config())?;
        for i in 0..u64::from(self.frame_count()) {
            let idx = FrameIndex(i);
            let frame = self.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
        }
        sink.end()
    }

    fn background(&self) -> Rgba8 {
        self.builder.theme().background
    }
}

/// Rasterize the full trajectory as one frame.
///
/// A varying phase has no meaning for a single image; the figure is drawn at phase 0.
pub fn render_still_frame(
    params: &LissajousParams,
    opts: &StillOpts,
) -> LissajousResult<FrameRGBA> {
    let params = still_params(params);
    params.validate_for_render()?;
    opts.validate()?;
    let figure = still_builder(&params, opts).build(&FrameGeometry::still(&params));
    backend_for(opts.font.as_deref())?.render(&figure)
}

/// Still image of the full trajectory, written as PNG or SVG.
///
/// Returns the path written. [`OutputTarget::Embed`] is not supported for stills; use
/// [`render_still_frame`] for in-memory pixels.
#[tracing::instrument(skip(params, opts))]
pub fn render_still(
    params: &LissajousParams,
    opts: &StillOpts,
    output: &OutputTarget,
) -> LissajousResult<PathBuf> {
    let format = output
        .format()
        .ok_or_else(|| LissajousError::invalid("stills must be written to a file"))?;
    if format.is_animated() {
        return Err(LissajousError::invalid(format!(
            "still images cannot be written as {}",
            format.extension()
        )));
    }

    let params = still_params(params);
    params.validate_for_render()?;
    opts.validate()?;
    let path = output
        .resolve(|ext| file_name(FigureKind::Still, &params, None, ext))
        .ok_or_else(|| LissajousError::invalid("stills must be written to a file"))?;

    let builder = still_builder(&params, opts);
    let figure = builder.build(&FrameGeometry::still(&params));
    match format {
        OutputFormat::Svg => write_bytes(&path, figure_to_svg(&figure).as_bytes())?,
        _ => {
            let frame = backend_for(opts.font.as_deref())?.render(&figure)?;
            write_png(&path, &frame, opts.theme.background.to_array())?;
        }
    }

    tracing::info!(path = %path.display(), "wrote still");
    Ok(path)
}

/// Single-axes animation.
#[tracing::instrument(skip(params, opts))]
pub fn render_animation(
    params: &LissajousParams,
    opts: &AnimationOpts,
    output: &OutputTarget,
) -> LissajousResult<Rendered> {
    render_animated(FigureKind::Single, params, opts, output)
}

/// Five-panel animation: the figure plus both waveforms on wrapped time axes.
#[tracing::instrument(skip(params, opts))]
pub fn render_waves(
    params: &LissajousParams,
    opts: &AnimationOpts,
    output: &OutputTarget,
) -> LissajousResult<Rendered> {
    render_animated(FigureKind::FivePanel, params, opts, output)
}

fn render_animated(
    kind: FigureKind,
    params: &LissajousParams,
    opts: &AnimationOpts,
    target: &OutputTarget,
) -> LissajousResult<Rendered> {
    if let Some(format) = target.format()
        && !format.is_animated()
    {
        return Err(LissajousError::invalid(format!(
            "animations cannot be written as {}",
            format.extension()
        )));
    }

    let mut session = AnimationSession::new(kind, params, opts)?;
    let bg = session.background();

    let Some(path) = target.resolve(|ext| file_name(kind, params, Some(opts), ext)) else {
        let mut sink = InMemorySink::new();
        session.render_all(&mut sink)?;
        let fps = session.sink_config().fps;
        tracing::debug!(frames = sink.frames().len(), "animation kept in memory");
        return Ok(Rendered::Embedded(Animation::new(
            sink.into_frames(),
            fps,
            bg,
        )));
    };

    match target.format() {
        Some(OutputFormat::Mp4) => {
            let mut sink = FfmpegSink::new(FfmpegSinkOpts {
                bg_rgba: bg.to_array(),
                ..FfmpegSinkOpts::new(&path)
            });
            session.render_all(&mut sink)?;
        }
        _ => {
            let mut bytes = Vec::new();
            {
                let mut sink = GifSink::new(&mut bytes, bg.to_array());
                session.render_all(&mut sink)?;
            }
            write_bytes(&path, &bytes)?;
        }
    }

    tracing::info!(path = %path.display(), frames = session.frame_count(), "wrote animation");
    Ok(Rendered::Saved(path))
}

fn backend_for(font: Option<&Path>) -> LissajousResult<CpuBackend> {
    match font {
        Some(path) => CpuBackend::with_font(&CaptionFont::from_path(path)?),
        None => Ok(CpuBackend::new()),
    }
}

fn still_params(params: &LissajousParams) -> LissajousParams {
    let mut params = *params;
    if params.phase.is_varying() {
        params.phase = PhaseSpec::Fixed(params.phase.base());
    }
    params
}

fn still_builder(params: &LissajousParams, opts: &StillOpts) -> FigureBuilder {
    FigureBuilder::new(FigureKind::Still, params)
        .with_canvas(opts.canvas.unwrap_or(FigureKind::Still.default_canvas()))
        .with_theme(opts.theme)
}

#[cfg(test)]
#[path = "../../tests/unit/session/render.rs"]
mod tests;
