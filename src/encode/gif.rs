use std::borrow::Cow;

use crate::{
    encode::palette::{TRANSPARENT_INDEX, index_frame},
    foundation::{
        core::FrameSequence,
        error::{AnimateError, AnimateResult},
    },
    settings::AnimateSettings,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifEncodeOpts {
    /// Per-frame delay in 1/100 s.
    pub delay_cs: u16,
    /// Alpha below this is written as the transparent index.
    pub transparent_below_alpha: u8,
}

impl Default for GifEncodeOpts {
    fn default() -> Self {
        Self::from_settings(&AnimateSettings::default())
    }
}

impl GifEncodeOpts {
    pub fn from_settings(settings: &AnimateSettings) -> Self {
        Self {
            delay_cs: settings.frame_delay_cs(),
            transparent_below_alpha: settings.transparent_below_alpha,
        }
    }
}

/// Encode `frames` as an infinitely looping GIF, fully in memory.
///
/// Empty or mismatched frame sets never get here: [`FrameSequence::new`] rejects them with
/// [`AnimateError::Encode`]. Every frame covers the whole canvas, uses its own palette with transparent index 0, and is
/// disposed to background before the next one is drawn.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(frames: &FrameSequence, opts: &GifEncodeOpts) -> AnimateResult<Vec<u8>> {
    let canvas = frames.canvas();
    let (width, height) = match (u16::try_from(canvas.width), u16::try_from(canvas.height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(AnimateError::encode(format!(
                "gif canvas must be 1..=65535 on each side, got {}x{}",
                canvas.width, canvas.height
            )));
        }
    };

    let mut out = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut out, width, height, &[])
            .map_err(|e| AnimateError::encode(format!("start gif stream: {e}")))?;
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(|e| AnimateError::encode(format!("write gif loop extension: {e}")))?;

        for (idx, frame) in frames.frames().iter().enumerate() {
            let indexed = index_frame(frame, opts.transparent_below_alpha);
            let gif_frame = gif::Frame {
                width,
                height,
                delay: opts.delay_cs,
                dispose: gif::DisposalMethod::Background,
                transparent: Some(TRANSPARENT_INDEX),
                palette: Some(indexed.palette),
                buffer: Cow::Owned(indexed.indices),
                ..gif::Frame::default()
            };
            encoder
                .write_frame(&gif_frame)
                .map_err(|e| AnimateError::encode(format!("write gif frame {idx}: {e}")))?;
        }
        // Dropping the encoder writes the trailer.
    }

    tracing::debug!(bytes = out.len(), "encoded gif");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
