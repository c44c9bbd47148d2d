use std::{io::Cursor, path::Path};

use crate::foundation::{
    core::PixelBuffer,
    error::{AnimateError, AnimateResult},
};

/// Open an image file and normalize it to straight RGBA8.
///
/// The format is sniffed from the file contents, so the extension does not need to match.
/// Sources without alpha come back fully opaque.
#[tracing::instrument]
pub fn load_image(path: &Path) -> AnimateResult<PixelBuffer> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| AnimateError::load(format!("open image '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| AnimateError::load(format!("read image '{}': {e}", path.display())))?;
    let img = reader
        .decode()
        .map_err(|e| AnimateError::load(format!("decode image '{}': {e}", path.display())))?;
    into_pixel_buffer(img)
}

/// Decode encoded image bytes and normalize to straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> AnimateResult<PixelBuffer> {
    let img = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AnimateError::load(format!("read image bytes: {e}")))?
        .decode()
        .map_err(|e| AnimateError::load(format!("decode image from memory: {e}")))?;
    into_pixel_buffer(img)
}

fn into_pixel_buffer(img: image::DynamicImage) -> AnimateResult<PixelBuffer> {
    if img.width() == 0 || img.height() == 0 {
        return Err(AnimateError::load("image has zero width or height"));
    }
    let had_alpha = img.color().has_alpha();
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, had_alpha, "decoded input image");
    PixelBuffer::new(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
