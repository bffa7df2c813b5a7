//! Conversation transcript model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::assistant::core::ids::TurnId;

/// Role of a conversation turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// Visitor input.
    User,
    /// Assistant response.
    Assistant,
}

impl TurnRole {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(value.to_string()),
        }
    }
}

/// One message in the visible transcript. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Turn identifier.
    pub id: TurnId,
    /// Who said it.
    pub role: TurnRole,
    /// Message text, plain text with light inline markup (`•`, `**`).
    pub text: String,
    /// Creation timestamp for ordering.
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// Build a user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role: TurnRole::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Build an assistant turn.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role: TurnRole::Assistant,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ordered transcript, seeded with a greeting turn.
///
/// Turns are appended in insertion order and never reordered or deleted;
/// the only other mutation is [`Transcript::reset`], which restores the
/// single seeded greeting turn.
#[derive(Clone, Debug)]
pub struct Transcript {
    greeting: String,
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    /// Create a transcript seeded with the greeting as an assistant turn.
    #[must_use]
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let turns = vec![ConversationTurn::assistant(greeting.clone())];
        Self { greeting, turns }
    }

    /// Append a turn.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// All turns in insertion order.
    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Number of turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True if the transcript holds no turns (never the case after
    /// construction or reset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Reset to the single seeded greeting turn.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.turns.push(ConversationTurn::assistant(self.greeting.clone()));
    }
}
