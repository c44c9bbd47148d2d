use crate::{
    animation::kind::AnimationType,
    effects::composite::{over_transparent_in_place, scale_alpha_in_place},
    foundation::{
        core::{FRAME_COUNT, FrameSequence, PixelBuffer},
        error::AnimateResult,
        math::cycle_phase,
    },
    settings::AnimateSettings,
    transform::affine::{rotation_about_center, shift_rows, warp_affine},
};

/// Closed-form transform parameters for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub index: usize,
    /// `sin(index * π / 8)`, exactly 0 at frames 0 and 8.
    pub phase: f64,
    /// `wave` rotation; positive is counter-clockwise on screen.
    pub angle_degrees: f64,
    /// `blink` alpha multiplier, `1 - |phase|`.
    pub opacity: f64,
    /// `bounce` vertical offset; positive is down.
    pub offset_px: i64,
}

impl FrameParams {
    pub fn for_frame(index: usize, settings: &AnimateSettings) -> Self {
        let phase = cycle_phase(index, FRAME_COUNT);
        Self {
            index,
            phase,
            angle_degrees: phase * settings.wave_max_degrees,
            opacity: 1.0 - phase.abs(),
            offset_px: (phase * settings.bounce_max_px).round() as i64,
        }
    }
}

/// Transform `src` for one frame and composite it over a transparent background.
pub fn render_frame(
    src: &PixelBuffer,
    kind: AnimationType,
    params: &FrameParams,
) -> AnimateResult<PixelBuffer> {
    let mut frame = match kind {
        AnimationType::Wave => {
            if params.angle_degrees == 0.0 {
                src.clone()
            } else {
                let xf = rotation_about_center(src.width(), src.height(), params.angle_degrees);
                warp_affine(src, xf)?
            }
        }
        AnimationType::Blink => {
            let mut f = src.clone();
            scale_alpha_in_place(&mut f, params.opacity);
            f
        }
        AnimationType::Bounce => shift_rows(src, params.offset_px),
    };
    over_transparent_in_place(&mut frame);
    Ok(frame)
}

/// Produce the full loop of [`FRAME_COUNT`] frames for `kind`.
#[tracing::instrument(skip(src, settings), fields(width = src.width(), height = src.height()))]
pub fn generate_frames(
    src: &PixelBuffer,
    kind: AnimationType,
    settings: &AnimateSettings,
) -> AnimateResult<FrameSequence> {
    let frames = (0..FRAME_COUNT)
        .map(|i| {
            let params = FrameParams::for_frame(i, settings);
            tracing::trace!(?params, "render frame");
            render_frame(src, kind, &params)
        })
        .collect::<AnimateResult<Vec<_>>>()?;

    tracing::debug!(frames = frames.len(), %kind, "generated frames");
    FrameSequence::new(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frames.rs"]
mod tests;
