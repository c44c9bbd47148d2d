use std::{fmt, str::FromStr};

use crate::foundation::error::AnimateError;

/// Which per-frame transform the generator applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Rock back and forth about the centre.
    Wave,
    /// Fade out and back in, twice per loop.
    Blink,
    /// Move down, back, up and back.
    Bounce,
}

impl AnimationType {
    pub const ALL: [AnimationType; 3] = [Self::Wave, Self::Blink, Self::Bounce];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Blink => "blink",
            Self::Bounce => "bounce",
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationType {
    type Err = AnimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AnimateError::invalid_animation_type(s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kind.rs"]
mod tests;
