/// Convenience result type used across Segue.
pub type SegueResult<T> = Result<T, SegueError>;

/// Top-level error taxonomy used by the fallible Segue surfaces.
///
/// The transition core itself never fails; these errors come from configuration, content
/// loading, and caller-provided data.
#[derive(thiserror::Error, Debug)]
pub enum SegueError {
    /// Invalid caller-provided data (slugs, frame rates, builder input).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or incomplete blog content.
    #[error("content error: {0}")]
    Content(String),

    /// Invalid configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegueError {
    /// Build a [`SegueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SegueError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`SegueError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SegueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
