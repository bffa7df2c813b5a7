//! Query resolution and answer rendering.

use std::sync::Arc;

use tracing::debug;

use crate::assistant::knowledge::base::KnowledgeBase;
use crate::assistant::knowledge::project::ProjectEntity;
use crate::assistant::matching::entities::resolve_project;
use crate::assistant::matching::topics::match_topic;
use crate::assistant::session::context::ContextLog;

/// Resolves normalized queries against the knowledge base and renders the
/// answer text.
///
/// Total: every input, including empty or nonsensical text, produces a
/// non-empty answer via the fallback chain. Matched and unmatched are both
/// successful outcomes, not errors.
#[derive(Clone, Debug)]
pub struct ResponseComposer {
    knowledge: Arc<KnowledgeBase>,
}

impl ResponseComposer {
    /// Create a composer over shared knowledge.
    #[must_use]
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Resolve one normalized query end to end and render the answer.
    ///
    /// Appends the query to the context log exactly once per invocation,
    /// match or no match, before matching, so that
    /// [`ContextLog::previous`] names the prior query during follow-up
    /// checks. Precedence: topic, then entity, then follow-up, then the
    /// fixed fallback.
    pub fn answer(&self, context: &mut ContextLog, query: &str) -> String {
        context.append(query.to_string());

        if let Some(rule) = match_topic(&self.knowledge.topics, query) {
            debug!("Matched topic {}", rule.id);
            return rule.response.clone();
        }

        if let Some(project) = resolve_project(&self.knowledge.projects, query) {
            debug!("Resolved project entity {}", project.id);
            return render_project(project);
        }

        if context.wants_project_detail(query) {
            debug!("Rendering project follow-up");
            return render_project_deep_dive(&self.knowledge.projects);
        }

        debug!("No match, rendering fallback");
        self.render_fallback()
    }

    /// The fixed default answer listing example prompts.
    #[must_use]
    pub fn render_fallback(&self) -> String {
        let mut out = String::from(
            "I don't have a good answer for that yet. I know Adrien's work \
             inside out, so try one of these:\n",
        );
        for prompt in &self.knowledge.example_prompts {
            out.push_str("• ");
            out.push_str(prompt);
            out.push('\n');
        }
        out.push_str("You can also ask about any project by name.");
        out
    }
}

/// Render the per-entity answer for one project.
#[must_use]
pub fn render_project(project: &ProjectEntity) -> String {
    let mut out = String::new();
    out.push_str("**");
    out.push_str(&project.display_name);
    out.push_str("**\n");
    out.push_str("Built with: ");
    out.push_str(&project.technologies.join(", "));
    out.push('\n');
    out.push_str(&project.impact_summary);
    if !project.metrics.is_empty() {
        out.push('\n');
        render_metrics(&mut out, project);
    }
    out
}

/// Render the extended follow-up answer covering the whole catalog.
///
/// Deliberately distinct from the standalone projects topic response: this
/// is the "give me more" tour with technologies and metrics per project.
#[must_use]
pub fn render_project_deep_dive(projects: &[ProjectEntity]) -> String {
    let mut out = String::from("Happy to go deeper. The full tour:\n");
    for project in projects {
        out.push('\n');
        out.push_str("**");
        out.push_str(&project.display_name);
        out.push_str("**\n");
        out.push_str("Built with: ");
        out.push_str(&project.technologies.join(", "));
        out.push('\n');
        out.push_str(&project.impact_summary);
        out.push('\n');
        render_metrics(&mut out, project);
    }
    out.push_str("\nAsk about any of them by name for the short version.");
    out
}

fn render_metrics(out: &mut String, project: &ProjectEntity) {
    for metric in &project.metrics {
        out.push_str("• ");
        out.push_str(&metric.label);
        out.push_str(": ");
        out.push_str(&metric.value);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::core::errors::AssistantResult;
    use crate::assistant::matching::normalize::normalize_query;

    fn composer() -> AssistantResult<ResponseComposer> {
        Ok(ResponseComposer::new(Arc::new(KnowledgeBase::builtin()?)))
    }

    fn ask(composer: &ResponseComposer, context: &mut ContextLog, raw: &str) -> String {
        composer.answer(context, &normalize_query(raw))
    }

    #[test]
    fn test_skills_scenario() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let answer = ask(&composer, &mut context, "What are his main technical skills?");
        assert!(answer.contains("core toolkit"));
        assert!(answer.contains("Rust"));
        Ok(())
    }

    #[test]
    fn test_gibberish_hits_fixed_fallback() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let answer = ask(&composer, &mut context, "asdkjasdkj");
        assert_eq!(answer, composer.render_fallback());
        assert!(!answer.is_empty());
        Ok(())
    }

    #[test]
    fn test_greeting_distinct_from_fallback() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let answer = ask(&composer, &mut context, "hello");
        assert_ne!(answer, composer.render_fallback());
        assert!(answer.contains("guide"));
        Ok(())
    }

    #[test]
    fn test_context_grows_by_one_per_invocation() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        for (i, raw) in ["hello", "asdkjasdkj", "tell me about projects"]
            .iter()
            .enumerate()
        {
            let _ = ask(&composer, &mut context, raw);
            assert_eq!(context.len(), i + 1);
        }
        Ok(())
    }

    #[test]
    fn test_follow_up_distinct_from_topic_and_fallback() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let standalone = ask(&composer, &mut context, "tell me about projects");
        let follow_up = ask(&composer, &mut context, "give me more");
        assert_ne!(follow_up, standalone);
        assert_ne!(follow_up, composer.render_fallback());
        assert!(follow_up.contains("Nova Ledger"));
        assert!(follow_up.contains("monthly users"));
        Ok(())
    }

    #[test]
    fn test_follow_up_requires_project_context() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let _ = ask(&composer, &mut context, "what are his skills");
        let answer = ask(&composer, &mut context, "give me more");
        assert_eq!(answer, composer.render_fallback());
        Ok(())
    }

    #[test]
    fn test_entity_lookup_after_no_topic_match() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let answer = ask(&composer, &mut context, "tell me about nova ledger");
        assert!(answer.contains("**Nova Ledger**"));
        assert!(answer.contains("p99 API latency"));
        Ok(())
    }

    #[test]
    fn test_topic_match_takes_priority_over_entity() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        // Mentions both the projects topic keyword and a catalog technology;
        // the topic wins because the matcher runs first.
        let answer = ask(&composer, &mut context, "which projects use react");
        assert!(answer.contains("highlights from Adrien's portfolio"));
        Ok(())
    }

    #[test]
    fn test_empty_query_still_produces_text() -> AssistantResult<()> {
        let composer = composer()?;
        let mut context = ContextLog::new();
        let answer = ask(&composer, &mut context, "");
        assert!(!answer.is_empty());
        assert_eq!(context.len(), 1);
        Ok(())
    }
}
