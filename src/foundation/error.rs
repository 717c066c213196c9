/// Result type returned by fallible shimmerkit APIs.
pub type ShimmerResult<T> = Result<T, ShimmerError>;

/// Errors raised while validating configuration or measuring text.
///
/// Playback itself never fails: degenerate inputs resolve to an inert state instead.
#[derive(thiserror::Error, Debug)]
pub enum ShimmerError {
    /// Configuration or input value outside its allowed range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font loading or text layout failed.
    #[error("measure error: {0}")]
    Measure(String),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShimmerError {
    /// Build a [`ShimmerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShimmerError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`ShimmerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ShimmerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
