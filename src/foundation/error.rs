/// Convenience result type used across Looped.
pub type LoopedResult<T> = Result<T, LoopedError>;

/// Error taxonomy for the scorecard pipeline.
///
/// Malformed score input is not an error: it is reported as
/// [`crate::ScoreEdit::Rejected`] and leaves the grid untouched.
#[derive(thiserror::Error, Debug)]
pub enum LoopedError {
    /// Invalid caller-provided data (layouts, sessions, drafts).
    #[error("validation error: {0}")]
    Validation(String),

    /// A base photo, overlay or watermark could not be loaded or decoded.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// Rasterizing or encoding an output image produced nothing usable.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopedError {
    /// Build a [`LoopedError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoopedError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`LoopedError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`LoopedError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Message suitable for an end-user alert.
    ///
    /// Load and encoding failures collapse into one generic message; the detailed cause is
    /// left to logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Please check your input and try again.",
            Self::AssetLoad(_) | Self::Encoding(_) | Self::Serde(_) | Self::Other(_) => {
                "Failed to save image. Please try again."
            }
        }
    }
}

impl From<serde_json::Error> for LoopedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
