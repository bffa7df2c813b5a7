//! Topic rules: named pattern-to-response bindings.

use serde::{Deserialize, Serialize};

use crate::assistant::core::ids::TopicId;

/// A named pattern-to-response binding in the knowledge base.
///
/// Rules are evaluated in declaration order and the first match wins, so
/// content authors put specific rules (contact, hiring) before broad ones
/// and collision-prone short keywords last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicRule {
    /// Unique topic identifier.
    pub id: TopicId,
    /// Lowercase substrings that trigger this topic. Matching is substring
    /// containment, not whole-word: "ai" matches inside "main".
    pub trigger_keywords: Vec<String>,
    /// Canned multi-part answer for the topic.
    pub response: String,
}

impl TopicRule {
    /// Build a rule, trimming and lowercasing every keyword.
    #[must_use]
    pub fn new(
        id: TopicId,
        trigger_keywords: impl IntoIterator<Item = impl Into<String>>,
        response: impl Into<String>,
    ) -> Self {
        let trigger_keywords = trigger_keywords
            .into_iter()
            .map(|keyword| keyword.into().trim().to_lowercase())
            .collect();

        Self {
            id,
            trigger_keywords,
            response: response.into(),
        }
    }

    /// True if any trigger keyword is contained in the normalized query.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.trigger_keywords
            .iter()
            .any(|keyword| query.contains(keyword.as_str()))
    }
}
