/// Convenience result type used across pixmorph.
pub type PixmorphResult<T> = Result<T, PixmorphError>;

/// Top-level error taxonomy used by decoder, transform, and render APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixmorphError {
    /// Malformed pixel-map input (header, channel values, triple count).
    #[error("format error: {0}")]
    Format(String),

    /// A file could not be opened, read, or written.
    #[error("io error: {context}")]
    Io {
        /// What was being attempted, usually including the path.
        context: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A numeric argument fell outside its contract (alpha, dimensions).
    #[error("range error: {0}")]
    Range(String),

    /// Invalid configuration or collaborator misuse.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixmorphError {
    /// Build a [`PixmorphError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`PixmorphError::Io`] value.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Build a [`PixmorphError::Range`] value.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Build a [`PixmorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixmorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
