/// Convenience result type used throughout the crate.
pub type AnimateResult<T> = Result<T, AnimateError>;

/// Error type for every fallible stage of turning an image into a GIF.
#[derive(thiserror::Error, Debug)]
pub enum AnimateError {
    /// Invalid caller input: settings, paths, buffer shapes.
    #[error("argument error: {0}")]
    Argument(String),

    /// The input image could not be opened or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// Animation type name outside `wave`, `blink`, `bounce`.
    #[error("invalid animation type '{0}' (expected one of: wave, blink, bounce)")]
    InvalidAnimationType(String),

    /// Frame rendering or GIF encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// The output directory or files could not be written.
    #[error("write error: {0}")]
    Write(String),
}

impl AnimateError {
    /// Build an [`AnimateError::Argument`] value.
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Build an [`AnimateError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build an [`AnimateError::InvalidAnimationType`] value from the rejected name.
    pub fn invalid_animation_type(value: impl Into<String>) -> Self {
        Self::InvalidAnimationType(value.into())
    }

    /// Build an [`AnimateError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`AnimateError::Write`] value.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
