use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Playback rate.
    pub fps: Fps,
}

impl SinkConfig {
    pub(crate) fn frame_len(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    pub(crate) fn check_frame(&self, frame: &FrameRGBA) -> LissajousResult<()> {
        if frame.width != self.width || frame.height != self.height {
            return Err(LissajousError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        if frame.data.len() != self.frame_len() {
            return Err(LissajousError::encode(
                "frame.data size mismatch with width*height*4",
            ));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order between `begin` and `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()>;
    /// Consume one frame of the size announced in `begin`.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LissajousResult<()>;
    /// Called once after the last frame; output is complete only when this succeeds.
    fn end(&mut self) -> LissajousResult<()>;
}

/// Reject a frame index that does not strictly follow `last`, then record it.
pub(crate) fn advance(last: &mut Option<FrameIndex>, idx: FrameIndex) -> LissajousResult<()> {
    if let Some(prev) = *last
        && idx.0 <= prev.0
    {
        return Err(LissajousError::encode(format!(
            "out-of-order frame index {} after {}",
            idx.0, prev.0
        )));
    }
    *last = Some(idx);
    Ok(())
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    last_idx: Option<FrameIndex>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the last `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames received so far, with their indices.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Frames in push order.
    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames.into_iter().map(|(_, f)| f).collect()
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LissajousResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| LissajousError::encode("in-memory sink not started"))?;
        cfg.check_frame(frame)?;
        advance(&mut self.last_idx, idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> LissajousResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
