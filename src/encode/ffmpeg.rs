//! MP4 output through the system `ffmpeg`.
//!
//! Frames are flattened to opaque RGBA8 and piped to `ffmpeg` as raw video, which encodes them
//! with `libx264` into `yuv420p`.

use std::ffi::OsString;
use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::encode::sink::{FrameSink, SinkConfig, advance};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::foundation::math::flatten_premul_over_bg_to_opaque_rgba8;
use crate::render::backend::FrameRGBA;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Destination MP4 path. Missing parent directories are created.
    pub out_path: PathBuf,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
    /// Straight RGBA8 color that translucent pixels are flattened over.
    pub bg_rgba: [u8; 4],
}

impl FfmpegSinkOpts {
    /// Overwriting output to `out_path` over a black background.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
        }
    }
}

/// Streams frames into an `ffmpeg` child process.
///
/// Dropping a sink whose [`FrameSink::end`] was never reached kills the child and removes the
/// partial output file.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    scratch: Vec<u8>,
}

impl FfmpegSink {
    /// Sink that has not spawned `ffmpeg` yet; that happens in [`FrameSink::begin`].
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
            scratch: Vec::new(),
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        validate_mp4_config(&cfg)?;
        if self.encoder.is_some() {
            return Err(LissajousError::encode("ffmpeg sink is already running"));
        }
        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(LissajousError::encode(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(LissajousError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            "spawning ffmpeg"
        );
        self.encoder = Some(Encoder::spawn(ffmpeg_args(&cfg, &self.opts))?);
        self.scratch = vec![0u8; cfg.frame_len()];
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LissajousResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg.as_ref(), self.encoder.as_mut()) else {
            return Err(LissajousError::encode("ffmpeg sink not started"));
        };
        advance(&mut self.last_idx, idx)?;
        cfg.check_frame(frame)?;
        flatten_premul_over_bg_to_opaque_rgba8(&mut self.scratch, &frame.data, self.opts.bg_rgba)?;
        encoder.write(&self.scratch)
    }

    fn end(&mut self) -> LissajousResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| LissajousError::encode("ffmpeg sink not started"))?;
        self.cfg = None;
        encoder.finish()
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        let Some(encoder) = self.encoder.take() else {
            return;
        };
        encoder.abort();
        if std::fs::remove_file(&self.opts.out_path).is_ok() {
            tracing::warn!(
                out = %self.opts.out_path.display(),
                "removed unfinished mp4"
            );
        }
    }
}

/// A running `ffmpeg` with its stderr drained on a helper thread.
struct Encoder {
    child: Child,
    stdin: ChildStdin,
    stderr: JoinHandle<std::io::Result<Vec<u8>>>,
}

impl Encoder {
    fn spawn(args: Vec<OsString>) -> LissajousResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| LissajousError::encode(format!("failed to spawn ffmpeg: {e}")))?;

        // Both pipes were requested above.
        let (Some(stdin), Some(mut stderr)) = (child.stdin.take(), child.stderr.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(LissajousError::encode("ffmpeg pipes are unavailable"));
        };
        let stderr = std::thread::spawn(move || {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf)?;
            Ok(buf)
        });
        Ok(Self {
            child,
            stdin,
            stderr,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> LissajousResult<()> {
        self.stdin
            .write_all(bytes)
            .map_err(|e| LissajousError::encode(format!("failed to write frame to ffmpeg: {e}")))
    }

    /// Close stdin so ffmpeg flushes the file, then report its exit status.
    fn finish(self) -> LissajousResult<()> {
        let Self {
            mut child,
            stdin,
            stderr,
        } = self;
        drop(stdin);
        let status = child
            .wait()
            .map_err(|e| LissajousError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let log = stderr.join().ok().and_then(Result::ok).unwrap_or_default();
        if status.success() {
            return Ok(());
        }
        Err(LissajousError::encode(format!(
            "ffmpeg exited with {status}: {}",
            String::from_utf8_lossy(&log).trim()
        )))
    }

    fn abort(self) {
        let Self {
            mut child,
            stdin,
            stderr,
        } = self;
        drop(stdin);
        let _ = child.kill();
        let _ = child.wait();
        let _ = stderr.join();
    }
}

/// Reject configurations `libx264`/`yuv420p` cannot take.
pub(crate) fn validate_mp4_config(cfg: &SinkConfig) -> LissajousResult<()> {
    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(LissajousError::invalid("fps must be non-zero"));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(LissajousError::invalid("mp4 width/height must be non-zero"));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(LissajousError::invalid(format!(
            "mp4 output needs an even width and height, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

/// Command line for raw RGBA8 on stdin to an H.264 MP4 without audio.
pub(crate) fn ffmpeg_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<OsString> {
    let overwrite = if opts.overwrite { "-y" } else { "-n" };
    let size = format!("{}x{}", cfg.width, cfg.height);
    // `-r` before `-i` sets the input rate; `num/den` keeps it exact.
    let rate = format!("{}/{}", cfg.fps.num, cfg.fps.den);
    let mut args: Vec<OsString> = [
        overwrite, "-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba", "-s", size.as_str(), "-r",
        rate.as_str(), "-i", "pipe:0", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags",
        "+faststart",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(opts.out_path.clone().into_os_string());
    args
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> LissajousResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// `true` when `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
