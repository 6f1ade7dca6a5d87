use crate::foundation::error::{LissajousError, LissajousResult};

pub use kurbo::{Point, Rect};

/// Zero-based animation frame index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frames-per-second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames.
    pub num: u32,
    /// Seconds; must be > 0.
    pub den: u32,
}

impl Fps {
    /// `num/den` frames per second; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> LissajousResult<Self> {
        if den == 0 {
            return Err(LissajousError::invalid("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LissajousError::invalid("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Integer frame rate (`fps/1`).
    pub fn whole(fps: u32) -> LissajousResult<Self> {
        Self::new(fps, 1)
    }

    /// Rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds per frame.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration of `frames` frames in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Per-frame delay in milliseconds as a `(numer, denom)` pair.
    pub fn frame_delay_ms(self) -> (u32, u32) {
        (self.den.saturating_mul(1000), self.num)
    }
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// `side` x `side` canvas.
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Both sides must be non-zero and fit in a `u16`.
    pub fn validate(self) -> LissajousResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LissajousError::invalid("canvas width/height must be non-zero"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(LissajousError::invalid(format!(
                "canvas {}x{} exceeds the {} px limit",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }
}

/// Straight (non-premultiplied) RGBA8 color. The default is transparent black.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb` hex form (alpha is emitted separately where needed).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha in `0.0..=1.0`.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
