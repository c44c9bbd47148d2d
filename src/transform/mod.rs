//! Geometric transforms over [`PixelBuffer`](crate::PixelBuffer)s.

pub mod affine;
