//! sketch-animate turns a single still image into a short looping GIF.
//!
//! # Pipeline overview
//!
//! 1. **Load**: any raster format `image` can decode, normalized to straight RGBA8
//! 2. **Generate**: 16 frames of `wave` (rotation), `blink` (alpha fade) or `bounce` (vertical
//!    shift), driven by one sine cycle and composited over transparent black
//! 3. **Encode**: an infinitely looping GIF, 50 ms per frame, transparent index 0, frames
//!    disposed to background
//! 4. **Write**: `animation.gif` and a byte-identical `preview.gif` in the output directory
//!
//! The whole run is synchronous. Encoding finishes in memory before the output directory is
//! created.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod effects;
mod encode;
mod foundation;
mod pipeline;
mod settings;
/// Geometric warps used by the generator.
pub mod transform;

pub use animation::frames::{FrameParams, generate_frames, render_frame};
pub use animation::kind::AnimationType;
pub use assets::decode::{decode_image, load_image};
pub use effects::composite::{
    StraightRgba8, over_transparent, over_transparent_in_place, scale_alpha_in_place,
};
pub use encode::gif::{GifEncodeOpts, encode_gif};
pub use encode::output::{
    ANIMATION_FILE_NAME, PREVIEW_FILE_NAME, ensure_output_dir, write_outputs,
};
pub use foundation::core::{
    Canvas, FRAME_COUNT, FrameSequence, PixelBuffer, check_uniform_frames,
};
pub use foundation::error::{AnimateError, AnimateResult};
pub use pipeline::{AnimateJob, animate_file, animate_to_gif, run};
pub use settings::{AnimateSettings, load_settings};
