//! Conversation orchestration and host boundaries.

pub mod controller;
pub mod speech;

pub use controller::{ControllerState, ConversationController};
pub use speech::SpeechSink;
