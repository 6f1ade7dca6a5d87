//! Looping GIF output through `image`'s encoder.

use std::io::Write;
use std::sync::{Arc, Mutex};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig, advance};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::foundation::math::flatten_premul_over_bg_to_opaque_rgba8;
use crate::render::backend::FrameRGBA;

/// NeuQuant sampling factor handed to the GIF encoder (1 = best, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// Looping GIF written to `W`.
///
/// `image` only writes the GIF trailer when its encoder is dropped and cannot report errors at
/// that point. The sink therefore encodes into its own buffer and hands the finished file to `W`
/// in [`FrameSink::end`], where write and flush errors are returned. Nothing reaches `W` before
/// `end`. A sink takes exactly one animation.
pub struct GifSink<W: Write + Send> {
    out: Option<W>,
    buf: GifBuffer,
    encoder: Option<GifEncoder<GifBuffer>>,
    bg_rgba: [u8; 4],
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

/// Byte buffer shared between the sink and the encoder that writes into it.
#[derive(Clone, Default)]
struct GifBuffer(Arc<Mutex<Vec<u8>>>);

impl GifBuffer {
    fn take(&self) -> LissajousResult<Vec<u8>> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| LissajousError::encode("gif buffer lock poisoned"))?;
        Ok(std::mem::take(&mut *bytes))
    }
}

impl Write for GifBuffer {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("gif buffer lock poisoned"))?
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<W: Write + Send> GifSink<W> {
    /// Translucent pixels are flattened over the straight RGBA8 color `bg_rgba`.
    pub fn new(out: W, bg_rgba: [u8; 4]) -> Self {
        Self {
            out: Some(out),
            buf: GifBuffer::default(),
            encoder: None,
            bg_rgba,
            cfg: None,
            last_idx: None,
        }
    }
}

impl<W: Write + Send> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(LissajousError::encode("gif width/height must be non-zero"));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(LissajousError::encode("gif width/height must fit in u16"));
        }
        if self.out.is_none() || self.encoder.is_some() {
            return Err(LissajousError::encode("gif sink was already used"));
        }
        let mut encoder = GifEncoder::new_with_speed(self.buf.clone(), GIF_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LissajousResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg.as_ref(), self.encoder.as_mut()) else {
            return Err(LissajousError::encode("gif sink not started"));
        };
        cfg.check_frame(frame)?;
        advance(&mut self.last_idx, idx)?;

        let mut rgba = vec![0u8; frame.data.len()];
        flatten_premul_over_bg_to_opaque_rgba8(&mut rgba, &frame.data, self.bg_rgba)?;
        let image = RgbaImage::from_raw(frame.width, frame.height, rgba)
            .ok_or_else(|| LissajousError::encode("gif frame buffer has the wrong length"))?;

        let (numer, denom) = cfg.fps.frame_delay_ms();
        let delay = Delay::from_numer_denom_ms(numer, denom);
        encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
        Ok(())
    }

    fn end(&mut self) -> LissajousResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| LissajousError::encode("gif sink not started"))?;
        // Dropping the encoder appends the trailer to the buffer.
        drop(encoder);
        self.cfg = None;

        let bytes = self.buf.take()?;
        let mut out = self
            .out
            .take()
            .ok_or_else(|| LissajousError::encode("gif sink was already used"))?;
        out.write_all(&bytes)
            .and_then(|()| out.flush())
            .map_err(|e| LissajousError::encode(format!("failed to write gif: {e}")))?;
        tracing::debug!(bytes = bytes.len(), "gif written");
        Ok(())
    }
}

/// Encode whole frames into an in-memory looping GIF.
pub fn encode_gif(frames: &[FrameRGBA], fps: Fps, bg_rgba: [u8; 4]) -> LissajousResult<Vec<u8>> {
    let first = frames
        .first()
        .ok_or_else(|| LissajousError::encode("cannot encode a gif without frames"))?;
    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes, bg_rgba);
        sink.begin(SinkConfig {
            width: first.width,
            height: first.height,
            fps,
        })?;
        for (i, frame) in frames.iter().enumerate() {
            sink.push_frame(FrameIndex(i as u64), frame)?;
        }
        sink.end()?;
    }
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
