//! Per-session conversation state: the visible transcript and the context
//! log used for follow-up resolution.
//!
//! Both live for the lifetime of one widget session and reset together;
//! nothing here is persisted.

pub mod context;
pub mod transcript;

pub use context::ContextLog;
pub use transcript::{ConversationTurn, Transcript, TurnRole};
