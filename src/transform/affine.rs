//! Affine warps that keep the canvas size and leave uncovered pixels transparent.

use std::sync::Arc;

use kurbo::{Affine, Point};

use crate::foundation::{
    core::PixelBuffer,
    error::{AnimateError, AnimateResult},
};

/// Rotation about the canvas centre.
///
/// Positive angles turn counter-clockwise on screen (the y axis points down).
pub fn rotation_about_center(width: u32, height: u32, degrees: f64) -> Affine {
    let center = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
    Affine::rotate_about(-degrees.to_radians(), center)
}

/// Draw `src` through `forward` onto a transparent canvas of the same size.
///
/// Rasterized by `vello_cpu` with its default (bilinear) image sampler; the premultiplied
/// result is converted back to straight alpha.
pub fn warp_affine(src: &PixelBuffer, forward: Affine) -> AnimateResult<PixelBuffer> {
    let (w, h) = canvas_u16(src)?;
    if w == 0 || h == 0 {
        return Ok(src.clone());
    }

    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(straight_to_pixmap(src, w, h))),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(forward));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(w),
        f64::from(h),
    ));
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let mut data = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_in_place(&mut data);
    PixelBuffer::new(src.width(), src.height(), data)
}

/// Shift rows by a whole number of pixels; positive moves content down.
///
/// Offsets beyond the canvas height clear the whole frame.
pub fn shift_rows(src: &PixelBuffer, dy: i64) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut out = PixelBuffer::transparent(w, h);
    let h = i64::from(h);
    let dy = dy.clamp(-h, h);
    let row_bytes = w as usize * 4;
    let data = src.as_raw();
    let dst = out.as_raw_mut();

    for y in 0..h {
        let sy = y - dy;
        if sy < 0 || sy >= h {
            continue;
        }
        let (d, s) = (y as usize * row_bytes, sy as usize * row_bytes);
        dst[d..d + row_bytes].copy_from_slice(&data[s..s + row_bytes]);
    }
    out
}

fn canvas_u16(src: &PixelBuffer) -> AnimateResult<(u16, u16)> {
    match (u16::try_from(src.width()), u16::try_from(src.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(AnimateError::encode(format!(
            "canvas {}x{} exceeds 65535 pixels per side",
            src.width(),
            src.height()
        ))),
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn straight_to_pixmap(src: &PixelBuffer, w: u16, h: u16) -> vello_cpu::Pixmap {
    let mut may_have_opacities = false;
    let pixels = src
        .pixels()
        .map(|px| {
            let a = px[3];
            may_have_opacities |= a != 255;
            let [r, g, b, a] = premul_rgba8(px[0], px[1], px[2], a);
            vello_cpu::peniko::color::PremulRgba8 { r, g, b, a }
        })
        .collect::<Vec<_>>();
    vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities)
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let premul = |c: u8| -> u8 { ((u32::from(c) * u32::from(a) + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px.copy_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
