use crate::foundation::error::{AnimateError, AnimateResult};

/// Frames per loop. One full sine cycle spans the loop.
pub const FRAME_COUNT: usize = 16;

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// `width * height`.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Straight (non-premultiplied) RGBA8 pixels, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes. Fails unless `data.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> AnimateResult<Self> {
        let expected = Canvas { width, height }.pixel_count() * 4;
        if data.len() != expected {
            return Err(AnimateError::argument(format!(
                "pixel buffer for {width}x{height} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// All pixels `[0, 0, 0, 0]`.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::from_pixel(width, height, [0, 0, 0, 0])
    }

    /// All pixels set to `px`.
    pub fn from_pixel(width: u32, height: u32, px: [u8; 4]) -> Self {
        let n = Canvas { width, height }.pixel_count();
        Self {
            width,
            height,
            data: px.repeat(n),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable row-major RGBA8 bytes; the length is fixed.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns `None` outside the buffer.
    pub fn get(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.pixel(x as u32, y as u32))
    }

    /// Pixel at `(x, y)`. Panics outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`. Panics outside the buffer.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Pixels in row-major order, each a 4-byte slice.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(4)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Exactly [`FRAME_COUNT`] frames sharing one canvas size, in playback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    canvas: Canvas,
    frames: Vec<PixelBuffer>,
}

impl FrameSequence {
    /// Fails with [`AnimateError::Encode`] unless there are exactly [`FRAME_COUNT`] frames of
    /// one size.
    pub fn new(frames: Vec<PixelBuffer>) -> AnimateResult<Self> {
        let canvas = check_uniform_frames(&frames)?;
        if frames.len() != FRAME_COUNT {
            return Err(AnimateError::encode(format!(
                "frame sequence needs {FRAME_COUNT} frames, got {}",
                frames.len()
            )));
        }
        Ok(Self { canvas, frames })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[PixelBuffer] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<PixelBuffer> {
        self.frames
    }
}

/// Checks that `frames` is non-empty and every frame has the first frame's size.
pub fn check_uniform_frames(frames: &[PixelBuffer]) -> AnimateResult<Canvas> {
    let Some(first) = frames.first() else {
        return Err(AnimateError::encode("frame sequence is empty"));
    };
    let canvas = first.canvas();
    for (idx, f) in frames.iter().enumerate().skip(1) {
        if f.canvas() != canvas {
            return Err(AnimateError::encode(format!(
                "frame {idx} is {}x{}, expected {}x{}",
                f.width(),
                f.height(),
                canvas.width,
                canvas.height
            )));
        }
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
