//! Error types for the assistant core.

use thiserror::Error;

use crate::assistant::core::ids::ContentKeyError;

/// Assistant error type.
///
/// An unmatched query is not an error: the composer always falls back to a
/// fixed default answer. Errors here are construction-time problems
/// (content, configuration) or host-boundary failures.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Invalid knowledge base content.
    #[error("invalid knowledge base: {0}")]
    InvalidKnowledge(String),
    /// Invalid content key.
    #[error("invalid content key: {0}")]
    ContentKey(#[from] ContentKeyError),
    /// Serialization error while loading a content fixture.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The conversation session has been closed.
    #[error("conversation session is closed")]
    SessionClosed,
    /// The host speech sink failed.
    #[error("speech sink error: {0}")]
    Speech(String),
}

/// Convenience result alias for assistant operations.
pub type AssistantResult<T> = Result<T, AssistantError>;
