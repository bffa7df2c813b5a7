//! Conversational assistant for the portfolio site, organized into:
//! - `core`: Configuration, errors, and identifier types
//! - `knowledge`: Topic rules, project catalog, and the content fixture
//! - `matching`: Query normalization, topic matching, and entity resolution
//! - `session`: Transcript and context log for one conversation
//! - `compose`: Response rendering for every resolution outcome
//! - `engine`: The conversation controller and host boundaries

pub mod compose;
pub mod core;
pub mod engine;
pub mod knowledge;
pub mod matching;
pub mod session;

// Re-export commonly used types for convenience
pub use compose::ResponseComposer;
pub use self::core::{
    AssistantConfig, AssistantError, AssistantResult, ChannelConfig, ComposeConfig,
    ContentKeyError, ProjectId, SessionId, TopicId, TurnId,
};
pub use engine::{ControllerState, ConversationController, SpeechSink};
pub use knowledge::{KnowledgeBase, ProjectEntity, ProjectMetric, TopicRule};
pub use matching::{match_topic, normalize_query, resolve_project};
pub use session::{ContextLog, ConversationTurn, Transcript, TurnRole};
