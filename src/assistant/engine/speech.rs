//! Host speech boundary.

use crate::assistant::core::errors::AssistantError;

/// Host-provided text-to-speech capability.
///
/// The controller forwards the assistant's answer text verbatim; the host
/// is responsible for stripping inline markup before synthesis. A failing
/// or absent sink never fails the text response: the controller logs the
/// error at debug level and moves on.
pub trait SpeechSink: Send + Sync {
    /// Speak the given text.
    ///
    /// # Errors
    /// Returns [`AssistantError::Speech`] when the host capability is
    /// unavailable or rejects the utterance.
    fn speak(&self, text: &str) -> Result<(), AssistantError>;
}
