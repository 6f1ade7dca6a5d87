/// Convenience result type used across the crate.
pub type LissajousResult<T> = Result<T, LissajousError>;

/// Top-level error taxonomy.
///
/// Every failure is a caller-input error or an IO/encoder failure; nothing here is retried.
#[derive(thiserror::Error, Debug)]
pub enum LissajousError {
    /// A precondition on user-provided parameters was violated (zero frames, zero fps, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Errors while rasterizing or laying out a figure.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding frames to an output file or buffer.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LissajousError {
    /// Build a [`LissajousError::InvalidParameter`] value.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`LissajousError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LissajousError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LissajousError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<image::ImageError> for LissajousError {
    fn from(e: image::ImageError) -> Self {
        Self::Encode(e.to_string())
    }
}

impl From<serde_json::Error> for LissajousError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
