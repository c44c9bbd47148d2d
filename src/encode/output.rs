use std::path::{Path, PathBuf};

use crate::foundation::error::{AnimateError, AnimateResult};

pub const ANIMATION_FILE_NAME: &str = "animation.gif";
/// Byte-identical copy of [`ANIMATION_FILE_NAME`], kept for consumers that read this name.
pub const PREVIEW_FILE_NAME: &str = "preview.gif";

/// Create `dir` (and parents) if missing. No-op when it already exists.
pub fn ensure_output_dir(dir: &Path) -> AnimateResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AnimateError::write(format!(
            "failed to create output directory '{}': {e}",
            dir.display()
        ))
    })
}

/// Write `bytes` to `animation.gif` (and `preview.gif` when `write_preview`) inside `dir`.
///
/// On failure any file already written by this call is removed again.
pub fn write_outputs(
    dir: &Path,
    bytes: &[u8],
    write_preview: bool,
) -> AnimateResult<Vec<PathBuf>> {
    ensure_output_dir(dir)?;

    let names: &[&str] = if write_preview {
        &[ANIMATION_FILE_NAME, PREVIEW_FILE_NAME]
    } else {
        &[ANIMATION_FILE_NAME]
    };

    let mut written = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(name);
        if let Err(e) = std::fs::write(&path, bytes) {
            remove_written(&written);
            return Err(AnimateError::write(format!(
                "failed to write '{}': {e}",
                path.display()
            )));
        }
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote animation");
        written.push(path);
    }
    Ok(written)
}

/// Best-effort rollback of files written earlier in a failed [`write_outputs`] call.
fn remove_written(paths: &[PathBuf]) {
    for p in paths {
        if let Err(e) = std::fs::remove_file(p) {
            tracing::warn!(path = %p.display(), error = %e, "failed to remove partial output");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
