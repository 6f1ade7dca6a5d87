use std::path::{Path, PathBuf};

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::gif::encode_gif;
use crate::foundation::core::{Fps, Rgba8};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::render::backend::FrameRGBA;

/// File formats the entry points can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raster still.
    Png,
    /// Vector still.
    Svg,
    /// Looping animation.
    Gif,
    /// H.264 animation through `ffmpeg`.
    Mp4,
}

impl OutputFormat {
    /// Lowercase file extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Gif => "gif",
            Self::Mp4 => "mp4",
        }
    }

    /// `true` for GIF and MP4.
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Gif | Self::Mp4)
    }

    /// Guess from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "gif" => Some(Self::Gif),
            "mp4" => Some(Self::Mp4),
            _ => None,
        }
    }
}

/// Where an entry point sends its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Auto-named file inside `dir`.
    Dir {
        /// Directory to write into.
        dir: PathBuf,
        /// Format of the file.
        format: OutputFormat,
    },
    /// Exactly this path.
    File {
        /// Destination file.
        path: PathBuf,
        /// Format of the file, independent of the path's extension.
        format: OutputFormat,
    },
    /// Keep the result in memory.
    Embed,
}

impl OutputTarget {
    /// File format, or `None` for [`OutputTarget::Embed`].
    pub fn format(&self) -> Option<OutputFormat> {
        match self {
            Self::Dir { format, .. } | Self::File { format, .. } => Some(*format),
            Self::Embed => None,
        }
    }

    /// Destination path; `file_name` is only consulted for [`OutputTarget::Dir`].
    pub(crate) fn resolve(&self, file_name: impl FnOnce(&str) -> String) -> Option<PathBuf> {
        match self {
            Self::Dir { dir, format } => Some(dir.join(file_name(format.extension()))),
            Self::File { path, .. } => Some(path.clone()),
            Self::Embed => None,
        }
    }
}

/// Result of an animation entry point.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    /// Written to this path.
    Saved(PathBuf),
    /// Kept in memory.
    Embedded(Animation),
}

impl Rendered {
    /// Path of a saved result.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Saved(p) => Some(p),
            Self::Embedded(_) => None,
        }
    }

    /// Frames of an embedded result.
    pub fn animation(&self) -> Option<&Animation> {
        match self {
            Self::Saved(_) => None,
            Self::Embedded(a) => Some(a),
        }
    }
}

/// In-memory animation, ready to be embedded or encoded later.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    frames: Vec<FrameRGBA>,
    fps: Fps,
    background: Rgba8,
}

impl Animation {
    pub(crate) fn new(frames: Vec<FrameRGBA>, fps: Fps, background: Rgba8) -> Self {
        Self {
            frames,
            fps,
            background,
        }
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Playback rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total playback time in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frames.len() as u64)
    }

    /// Encode as a looping GIF.
    pub fn to_gif_bytes(&self) -> LissajousResult<Vec<u8>> {
        encode_gif(&self.frames, self.fps, self.background.to_array())
    }

    /// Write the GIF encoding to `path`.
    pub fn write_gif(&self, path: &Path) -> LissajousResult<()> {
        if self.frames.is_empty() {
            return Err(LissajousError::encode("animation has no frames"));
        }
        let bytes = self.to_gif_bytes()?;
        write_bytes(path, &bytes)
    }
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> LissajousResult<()> {
    use anyhow::Context as _;
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/output.rs"]
mod tests;
