use crate::encode::ffmpeg::{ensure_parent_dir, flatten_to_opaque_rgba8};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{TwostepError, TwostepResult};
use crate::render::backend::FrameRGBA;
use std::path::Path;

/// Flatten `frame` over `background` and drop alpha.
pub fn frame_to_rgb8(frame: &FrameRGBA, background: Rgb8) -> TwostepResult<image::RgbImage> {
    let mut opaque = vec![0u8; frame.data.len()];
    flatten_to_opaque_rgba8(&mut opaque, &frame.data, frame.premultiplied, background)?;
    let rgb: Vec<u8> = opaque
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    image::RgbImage::from_raw(frame.width, frame.height, rgb)
        .ok_or_else(|| TwostepError::encode("frame buffer does not match width*height"))
}

/// Write `frame` as an opaque RGB PNG, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> TwostepResult<()> {
    use anyhow::Context as _;

    ensure_parent_dir(path)?;
    let img = frame_to_rgb8(frame, Rgb8::WHITE)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
