//! Looping GIF encoding and output files.

/// GIF stream encoding.
pub mod gif;
/// Output directory handling.
pub mod output;
pub(crate) mod palette;
