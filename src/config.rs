//! Serializable render settings.
//!
//! Everything here has serde defaults, so a JSON file only needs the fields it changes:
//!
//! ```json
//! { "params": { "y": { "amplitude": 1.0, "angular_frequency": 3.0 }, "phase": "varying" },
//!   "animation": { "draw": true, "frames": 120 } }
//! ```

use std::path::{Path, PathBuf};

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::plot::theme::Theme;
use crate::sampling::oscillator::LissajousParams;
use crate::schedule::frame::ScheduleOpts;

/// Animation options shared by the single-axes and five-panel outputs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationOpts {
    /// Trace the curve during the first half of the frames and erase it during the second.
    pub draw: bool,
    /// Mark the current time index.
    pub show_dot: bool,
    /// Number of frames rendered.
    pub frames: u32,
    /// Playback rate in frames per second.
    pub fps: u32,
    /// Output size; `None` picks the layout's default.
    pub canvas: Option<Canvas>,
    /// Colors and stroke widths.
    pub theme: Theme,
    /// Font file for titles and axis labels; raster frames carry no captions without one.
    pub font: Option<PathBuf>,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self {
            draw: false,
            show_dot: false,
            frames: 200,
            fps: 20,
            canvas: None,
            theme: Theme::default(),
            font: None,
        }
    }
}

impl AnimationOpts {
    /// Reject zero frames or fps, and an unusable canvas or theme.
    pub fn validate(&self) -> LissajousResult<()> {
        if self.frames == 0 {
            return Err(LissajousError::invalid("frames must be > 0"));
        }
        if self.fps == 0 {
            return Err(LissajousError::invalid("fps must be > 0"));
        }
        if let Some(canvas) = self.canvas {
            canvas.validate()?;
        }
        validate_theme(&self.theme)
    }

    /// Frame rate as a validated [`Fps`].
    pub fn fps(&self) -> LissajousResult<Fps> {
        Fps::whole(self.fps)
    }

    pub(crate) fn schedule_opts(&self, waves: bool) -> LissajousResult<ScheduleOpts> {
        Ok(ScheduleOpts {
            frames: self.frames,
            fps: self.fps()?,
            draw: self.draw,
            show_dot: self.show_dot,
            waves,
        })
    }
}

/// Options for a single still image.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StillOpts {
    /// Output size; `None` picks 600x600.
    pub canvas: Option<Canvas>,
    /// Colors and stroke widths.
    pub theme: Theme,
    /// Font file for PNG captions. SVG output leaves font selection to the viewer.
    pub font: Option<PathBuf>,
}

impl StillOpts {
    /// Reject an unusable canvas or theme.
    pub fn validate(&self) -> LissajousResult<()> {
        if let Some(canvas) = self.canvas {
            canvas.validate()?;
        }
        validate_theme(&self.theme)
    }
}

fn validate_theme(theme: &Theme) -> LissajousResult<()> {
    let widths = [
        ("line_width", theme.line_width),
        ("grid_width", theme.grid_width),
        ("marker_radius", theme.marker_radius),
    ];
    for (name, v) in widths {
        if !(v.is_finite() && v >= 0.0) {
            return Err(LissajousError::invalid(format!(
                "theme {name} must be finite and >= 0, got {v}"
            )));
        }
    }
    if !(theme.caption_size.is_finite() && theme.caption_size > 0.0) {
        return Err(LissajousError::invalid(format!(
            "theme caption_size must be finite and > 0, got {}",
            theme.caption_size
        )));
    }
    Ok(())
}

/// Complete settings as loaded from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Oscillators and phase.
    pub params: LissajousParams,
    /// Settings for `animate` and `waves`.
    pub animation: AnimationOpts,
    /// Settings for `still`.
    pub still: StillOpts,
}

impl RenderConfig {
    /// Parse JSON; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> LissajousResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_path(path: &Path) -> LissajousResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON with every field present.
    pub fn to_json_pretty(&self) -> LissajousResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate parameters and both option sets.
    pub fn validate(&self) -> LissajousResult<()> {
        self.params.validate_for_render()?;
        self.animation.validate()?;
        self.still.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
