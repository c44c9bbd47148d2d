use std::path::{Path, PathBuf};

use crate::{
    animation::{frames::generate_frames, kind::AnimationType},
    assets::decode::load_image,
    encode::{
        gif::{GifEncodeOpts, encode_gif},
        output::write_outputs,
    },
    foundation::{core::PixelBuffer, error::AnimateResult},
    settings::AnimateSettings,
};

/// One end-to-end run: input image, output directory, animation and settings.
#[derive(Clone, Debug)]
pub struct AnimateJob {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub kind: AnimationType,
    pub settings: AnimateSettings,
}

impl AnimateJob {
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        kind: AnimationType,
    ) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            kind,
            settings: AnimateSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AnimateSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Load, animate, encode, then write. Returns the written paths.
///
/// Nothing touches the output directory until the GIF is fully encoded, so a failed load or
/// encode leaves no trace on disk.
#[tracing::instrument(skip(job), fields(input = %job.input.display(), kind = %job.kind))]
pub fn run(job: &AnimateJob) -> AnimateResult<Vec<PathBuf>> {
    job.settings.validate()?;

    let src = load_image(&job.input)?;
    let bytes = animate_to_gif(&src, job.kind, &job.settings)?;
    write_outputs(&job.output_dir, &bytes, job.settings.write_preview)
}

/// Generate and encode without touching the filesystem.
pub fn animate_to_gif(
    src: &PixelBuffer,
    kind: AnimationType,
    settings: &AnimateSettings,
) -> AnimateResult<Vec<u8>> {
    let frames = generate_frames(src, kind, settings)?;
    encode_gif(&frames, &GifEncodeOpts::from_settings(settings))
}

/// Convenience wrapper over [`run`] with default settings.
pub fn animate_file(
    input: &Path,
    output_dir: &Path,
    kind: AnimationType,
) -> AnimateResult<Vec<PathBuf>> {
    run(&AnimateJob::new(input, output_dir, kind))
}
