//! The knowledge base: validated, immutable assistant content.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::assistant::core::errors::{AssistantError, AssistantResult};
use crate::assistant::knowledge::project::ProjectEntity;
use crate::assistant::knowledge::topic::TopicRule;

/// Curated, read-only content for the assistant.
///
/// Built once at startup (from the builtin fixture or a JSON document),
/// validated, then shared immutably for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Topic rules in match-precedence order. Order is significant: the
    /// first rule whose keywords hit wins.
    pub topics: Vec<TopicRule>,
    /// Project catalog in lookup-precedence order.
    pub projects: Vec<ProjectEntity>,
    /// Greeting shown as the seeded first turn of every conversation.
    pub greeting: String,
    /// Example prompts listed by the fallback answer.
    pub example_prompts: Vec<String>,
}

impl KnowledgeBase {
    /// Build and validate a knowledge base.
    ///
    /// # Errors
    /// Returns an error if any content invariant is violated.
    pub fn new(
        topics: Vec<TopicRule>,
        projects: Vec<ProjectEntity>,
        greeting: impl Into<String>,
        example_prompts: Vec<String>,
    ) -> AssistantResult<Self> {
        let base = Self {
            topics,
            projects,
            greeting: greeting.into(),
            example_prompts,
        }
        .canonicalized();
        base.validate()?;
        Ok(base)
    }

    /// Load and validate a knowledge base from a JSON fixture.
    ///
    /// # Errors
    /// Returns an error if the document does not parse or violates a
    /// content invariant.
    pub fn from_json_str(raw: &str) -> AssistantResult<Self> {
        let base: Self = serde_json::from_str(raw)?;
        let base = base.canonicalized();
        base.validate()?;
        Ok(base)
    }

    /// Trim and lowercase every trigger keyword. Display text is left as
    /// authored.
    fn canonicalized(mut self) -> Self {
        for rule in &mut self.topics {
            for keyword in &mut rule.trigger_keywords {
                *keyword = keyword.trim().to_lowercase();
            }
        }
        self
    }

    /// Validate content invariants.
    ///
    /// # Errors
    /// Returns an error on duplicate or malformed identifiers, empty
    /// keyword sets, an empty greeting, or an empty example-prompt list.
    pub fn validate(&self) -> AssistantResult<()> {
        if self.topics.is_empty() {
            return Err(AssistantError::InvalidKnowledge(
                "at least one topic rule is required".to_string(),
            ));
        }

        let mut topic_ids = HashSet::new();
        for rule in &self.topics {
            rule.id.validate().map_err(|err| {
                AssistantError::InvalidKnowledge(format!("topic id {}: {err}", rule.id))
            })?;
            if !topic_ids.insert(rule.id.as_str()) {
                return Err(AssistantError::InvalidKnowledge(format!(
                    "duplicate topic id: {}",
                    rule.id
                )));
            }
            if rule.trigger_keywords.is_empty() {
                return Err(AssistantError::InvalidKnowledge(format!(
                    "topic {} has no trigger keywords",
                    rule.id
                )));
            }
            if rule.trigger_keywords.iter().any(|k| k.is_empty()) {
                return Err(AssistantError::InvalidKnowledge(format!(
                    "topic {} has an empty trigger keyword",
                    rule.id
                )));
            }
            if rule.response.trim().is_empty() {
                return Err(AssistantError::InvalidKnowledge(format!(
                    "topic {} has an empty response",
                    rule.id
                )));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            project.id.validate().map_err(|err| {
                AssistantError::InvalidKnowledge(format!("project id {}: {err}", project.id))
            })?;
            if !project_ids.insert(project.id.as_str()) {
                return Err(AssistantError::InvalidKnowledge(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
            if project.display_name.trim().is_empty() {
                return Err(AssistantError::InvalidKnowledge(format!(
                    "project {} has an empty display name",
                    project.id
                )));
            }
        }

        if self.greeting.trim().is_empty() {
            return Err(AssistantError::InvalidKnowledge(
                "greeting must not be empty".to_string(),
            ));
        }

        if self.example_prompts.is_empty() {
            return Err(AssistantError::InvalidKnowledge(
                "at least one example prompt is required".to_string(),
            ));
        }

        Ok(())
    }
}
