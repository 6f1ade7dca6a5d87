use crate::foundation::error::LissajousResult;
use crate::plot::figure::Figure;

/// Rendered frame in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA8 of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Anything that can turn a [`Figure`] into pixels.
pub trait RenderBackend {
    /// Rasterize one figure.
    fn render(&mut self, figure: &Figure) -> LissajousResult<FrameRGBA>;
}
