use std::path::Path;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::LissajousResult;
use crate::foundation::math::flatten_premul_over_bg_to_opaque_rgba8;
use crate::render::backend::FrameRGBA;

/// Write one frame as an opaque RGBA8 PNG, creating the parent directory if needed.
pub fn write_png(path: &Path, frame: &FrameRGBA, bg_rgba: [u8; 4]) -> LissajousResult<()> {
    ensure_parent_dir(path)?;
    let mut rgba = vec![0u8; frame.data.len()];
    flatten_premul_over_bg_to_opaque_rgba8(&mut rgba, &frame.data, bg_rgba)?;
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
