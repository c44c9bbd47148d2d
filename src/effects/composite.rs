use crate::foundation::{core::PixelBuffer, math::mul_div255_trunc};

pub type StraightRgba8 = [u8; 4];

/// Source-over onto a fully transparent black background.
///
/// `rgb = rgb * a / 255` (truncated) and alpha passes through unchanged.
pub fn over_transparent(src: StraightRgba8) -> StraightRgba8 {
    let a = src[3];
    [
        mul_div255_trunc(src[0], a),
        mul_div255_trunc(src[1], a),
        mul_div255_trunc(src[2], a),
        a,
    ]
}

pub fn over_transparent_in_place(buf: &mut PixelBuffer) {
    for px in buf.as_raw_mut().chunks_exact_mut(4) {
        let out = over_transparent([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}

/// Multiply every alpha by `opacity` (clamped to `[0, 1]`), truncating.
pub fn scale_alpha_in_place(buf: &mut PixelBuffer, opacity: f64) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }
    for px in buf.as_raw_mut().chunks_exact_mut(4) {
        px[3] = (f64::from(px[3]) * opacity) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
