//! Tunable animation constants, optionally loaded from a JSON file.

use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{AnimateError, AnimateResult};

/// Per-run settings. Every field defaults to the stock animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimateSettings {
    /// Display time of each frame in milliseconds. GIF stores centiseconds.
    pub frame_delay_ms: u32,
    /// Peak rotation of the `wave` animation, in degrees.
    pub wave_max_degrees: f64,
    /// Peak vertical travel of the `bounce` animation, in pixels.
    pub bounce_max_px: f64,
    /// Pixels whose alpha is below this value are written as the GIF transparent index.
    pub transparent_below_alpha: u8,
    /// Also write `preview.gif` next to `animation.gif`.
    pub write_preview: bool,
}

impl Default for AnimateSettings {
    fn default() -> Self {
        Self {
            frame_delay_ms: 50,
            wave_max_degrees: 0.2 * 15.0,
            bounce_max_px: 30.0,
            transparent_below_alpha: 1,
            write_preview: true,
        }
    }
}

/// Largest accepted bounce amplitude; no frame can be taller than this anyway.
pub const MAX_BOUNCE_PX: f64 = 65_535.0;

impl AnimateSettings {
    pub fn validate(&self) -> AnimateResult<()> {
        if self.frame_delay_ms < 10 || !self.frame_delay_ms.is_multiple_of(10) {
            return Err(AnimateError::argument(format!(
                "frame_delay_ms must be a positive multiple of 10, got {}",
                self.frame_delay_ms
            )));
        }
        if self.frame_delay_ms / 10 > u32::from(u16::MAX) {
            return Err(AnimateError::argument("frame_delay_ms is too large for GIF"));
        }
        if !self.wave_max_degrees.is_finite() || !(0.0..=180.0).contains(&self.wave_max_degrees) {
            return Err(AnimateError::argument(
                "wave_max_degrees must be finite and within [0, 180]",
            ));
        }
        if !self.bounce_max_px.is_finite()
            || !(0.0..=MAX_BOUNCE_PX).contains(&self.bounce_max_px)
        {
            return Err(AnimateError::argument(format!(
                "bounce_max_px must be finite and within [0, {MAX_BOUNCE_PX}]",
            )));
        }
        Ok(())
    }

    /// Frame delay in GIF units (1/100 s).
    pub fn frame_delay_cs(&self) -> u16 {
        (self.frame_delay_ms / 10).min(u32::from(u16::MAX)) as u16
    }
}

/// Read settings from a JSON file and validate them.
pub fn load_settings(path: &Path) -> AnimateResult<AnimateSettings> {
    let f = File::open(path).map_err(|e| {
        AnimateError::argument(format!("open settings '{}': {e}", path.display()))
    })?;
    let settings: AnimateSettings = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
        AnimateError::argument(format!("parse settings '{}': {e}", path.display()))
    })?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
