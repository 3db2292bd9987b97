/// Convenience result type used across Stillframe.
pub type StillframeResult<T> = Result<T, StillframeError>;

/// Top-level error taxonomy for the render pipeline.
///
/// Every applier surfaces its own failure; the orchestrator never catches or
/// downgrades one. The first failure in the sequential layer chain aborts the
/// remaining layers and reaches the caller unmodified.
#[derive(thiserror::Error, Debug)]
pub enum StillframeError {
    /// No canvas configuration value was supplied where one is required.
    #[error("invalid canvas configuration: {0}")]
    InvalidConfig(String),

    /// A layer applier was invoked without a drawing surface.
    #[error("no drawing surface supplied")]
    MissingContext,

    /// An image layer has no `imageUrl`.
    #[error("image layer has no image url")]
    MissingImageUrl,

    /// A text layer has no `text`.
    #[error("text layer has no text")]
    MissingText,

    /// The remote fetch collaborator failed; the underlying error is preserved.
    #[error("fetch error: {0}")]
    Fetch(#[source] anyhow::Error),

    /// An image could not be decoded or composited onto the surface.
    ///
    /// Deliberately generic so decoder internals do not leak to callers.
    #[error("Image could not be imported")]
    ImageImport,

    /// Final surface-to-bytes serialization failed.
    #[error("encode error: {0}")]
    Encode(#[source] anyhow::Error),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StillframeError {
    /// Build a [`StillframeError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`StillframeError::Fetch`] value.
    pub fn fetch(err: impl Into<anyhow::Error>) -> Self {
        Self::Fetch(err.into())
    }

    /// Build a [`StillframeError::Encode`] value.
    pub fn encode(err: impl Into<anyhow::Error>) -> Self {
        Self::Encode(err.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
