//! Builtin content fixture: the portfolio knowledge shipped with the crate.
//!
//! This is data, not logic. Topic order is part of the content contract:
//! specific rules (contact) come before broad ones, and the greeting rule
//! sits last because its short keywords collide inside longer words.

use crate::assistant::core::errors::AssistantResult;
use crate::assistant::core::ids::{ProjectId, TopicId};
use crate::assistant::knowledge::base::KnowledgeBase;
use crate::assistant::knowledge::project::{ProjectEntity, ProjectMetric};
use crate::assistant::knowledge::topic::TopicRule;

impl KnowledgeBase {
    /// The builtin portfolio content.
    ///
    /// # Errors
    /// Returns an error if the authored content violates a validation
    /// invariant.
    pub fn builtin() -> AssistantResult<Self> {
        Self::new(
            builtin_topics()?,
            builtin_projects()?,
            "Hi there! I'm Adrien's portfolio assistant. Ask me about his \
             skills, projects, or experience, or how to get in touch.",
            vec![
                "What are his main technical skills?".to_string(),
                "Tell me about his projects".to_string(),
                "What's his work experience?".to_string(),
                "How can I get in touch?".to_string(),
            ],
        )
    }
}

fn topic(id: &str, keywords: &[&str], response: &str) -> AssistantResult<TopicRule> {
    Ok(TopicRule::new(
        TopicId::new(id)?,
        keywords.iter().copied(),
        response,
    ))
}

fn builtin_topics() -> AssistantResult<Vec<TopicRule>> {
    Ok(vec![
        topic(
            "contact",
            &[
                "contact",
                "hire",
                "hiring",
                "email",
                "reach out",
                "get in touch",
                "freelance",
                "open to work",
                "collaborat",
            ],
            "Adrien is open to backend and full-stack opportunities.\n\
             • **Email**: adrien@adrienvale.dev\n\
             • **GitHub**: github.com/adrienvale\n\
             • **LinkedIn**: linkedin.com/in/adrienvale\n\
             He typically replies within two business days.",
        )?,
        topic(
            "skills",
            &[
                "skill",
                "technolog",
                "stack",
                "tools",
                "languages",
                "frameworks",
                "proficien",
                "good at",
            ],
            "Adrien's core toolkit:\n\
             • **Languages**: Rust, TypeScript, Python, SQL\n\
             • **Backend**: Axum, tokio, PostgreSQL, Redis\n\
             • **Frontend**: React, Svelte\n\
             • **Operations**: Docker, GitHub Actions, Grafana\n\
             He is strongest where a typed backend meets a realtime UI.",
        )?,
        topic(
            "projects",
            &["project", "portfolio", "built", "showcase", "shipped"],
            "A few highlights from Adrien's portfolio:\n\
             • **Nova Ledger**: double-entry budgeting for humans\n\
             • **Pulse Board**: realtime status boards for small teams\n\
             • **Drift Search**: typo-tolerant search for documentation sites\n\
             • **Atlas Notes**: offline-first notes with conflict-free sync\n\
             Say \"give me more\" for the full tour, or ask about any project \
             by name.",
        )?,
        topic(
            "experience",
            &[
                "experience",
                "career",
                "background",
                "worked",
                "employer",
                "company",
                "companies",
                "job",
                "role",
            ],
            "Eight years of shipping production software:\n\
             • **Helios Systems** (2021 to now): senior engineer, data platform\n\
             • **Brightline** (2018 to 2021): full-stack engineer, payments\n\
             • **Independent** (2016 to 2018): web apps for early-stage startups\n\
             Ask about skills or projects to see what he built along the way.",
        )?,
        topic(
            "education",
            &[
                "education",
                "degree",
                "university",
                "studied",
                "school",
                "certification",
                "academic",
            ],
            "• **MSc Computer Science**: INSA Lyon, 2016\n\
             • **BSc Computer Science**: INSA Lyon, 2014\n\
             Plus the usual trail of certifications: AWS Solutions Architect \
             Associate and CKA.",
        )?,
        topic(
            "about",
            &[
                "who is",
                "about adrien",
                "about him",
                "yourself",
                "who are you",
                "bio",
            ],
            "Adrien Vale is a senior software engineer in Lyon who likes typed \
             languages, boring deploys, and fast feedback loops. He has spent \
             the last eight years building data-heavy web products, most \
             recently realtime infrastructure.",
        )?,
        topic(
            "interests",
            &[
                "hobby",
                "hobbies",
                "interest",
                "free time",
                "outside of work",
                "fun",
                "passion",
            ],
            "Away from the keyboard Adrien is usually:\n\
             • climbing at the local bouldering gym\n\
             • tinkering with a home-lab Kubernetes cluster\n\
             • brewing increasingly fussy espresso\n\
             He claims the espresso is latency research.",
        )?,
        topic(
            "thanks",
            &["thank", "thanks", "appreciate", "merci"],
            "Happy to help! Ask away if anything else about Adrien's work \
             comes to mind.",
        )?,
        topic(
            "farewell",
            &["bye", "goodbye", "see you", "take care", "later"],
            "Thanks for stopping by, come back any time. If you want to keep \
             in touch, just ask how to contact Adrien.",
        )?,
        // Short greeting keywords collide inside longer words ("hi" in
        // "architecture"), so this rule stays behind the specific topics.
        topic(
            "greeting",
            &[
                "hello",
                "hey",
                "hi",
                "good morning",
                "good afternoon",
                "good evening",
                "greetings",
                "howdy",
                "what's up",
                "bonjour",
            ],
            "Hey! I'm the guide to Adrien's corner of the internet. Ask me \
             about his **skills**, **projects**, **experience**, or how to \
             **get in touch**.",
        )?,
    ])
}

fn builtin_projects() -> AssistantResult<Vec<ProjectEntity>> {
    Ok(vec![
        ProjectEntity {
            id: ProjectId::new("nova-ledger")?,
            display_name: "Nova Ledger".to_string(),
            technologies: vec![
                "Rust".to_string(),
                "Axum".to_string(),
                "PostgreSQL".to_string(),
                "React".to_string(),
            ],
            impact_summary: "Double-entry budgeting that turns reconciliation \
                             into a two-minute chore instead of a lost weekend."
                .to_string(),
            metrics: vec![
                ProjectMetric::new("monthly users", "2,400"),
                ProjectMetric::new("p99 API latency", "45 ms"),
                ProjectMetric::new("uptime last 12 months", "99.97%"),
            ],
        },
        ProjectEntity {
            id: ProjectId::new("pulse-board")?,
            display_name: "Pulse Board".to_string(),
            technologies: vec![
                "TypeScript".to_string(),
                "React".to_string(),
                "WebSockets".to_string(),
                "Redis".to_string(),
            ],
            impact_summary: "Realtime status boards that keep distributed \
                             teams out of status meetings."
                .to_string(),
            metrics: vec![
                ProjectMetric::new("concurrent boards", "850"),
                ProjectMetric::new("median update fan-out", "120 ms"),
            ],
        },
        ProjectEntity {
            id: ProjectId::new("drift-search")?,
            display_name: "Drift Search".to_string(),
            technologies: vec![
                "Rust".to_string(),
                "Tantivy".to_string(),
                "WebAssembly".to_string(),
            ],
            impact_summary: "Typo-tolerant documentation search that runs \
                             entirely in the visitor's browser."
                .to_string(),
            metrics: vec![
                ProjectMetric::new("indexed pages", "40k"),
                ProjectMetric::new("median query time", "8 ms"),
            ],
        },
        ProjectEntity {
            id: ProjectId::new("atlas-notes")?,
            display_name: "Atlas Notes".to_string(),
            technologies: vec![
                "TypeScript".to_string(),
                "Svelte".to_string(),
                "SQLite".to_string(),
            ],
            impact_summary: "Offline-first notes with conflict-free sync \
                             across devices."
                .to_string(),
            metrics: vec![
                ProjectMetric::new("sync conflicts resolved automatically", "100%"),
                ProjectMetric::new("cold start", "under 1 s"),
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixture_validates() -> AssistantResult<()> {
        let base = KnowledgeBase::builtin()?;
        assert!(base.topics.len() >= 8);
        assert_eq!(base.projects.len(), 4);
        Ok(())
    }

    #[test]
    fn test_builtin_keywords_already_lowercase() -> AssistantResult<()> {
        let base = KnowledgeBase::builtin()?;
        for rule in &base.topics {
            for keyword in &rule.trigger_keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
                assert_eq!(keyword, keyword.trim());
            }
        }
        Ok(())
    }

    #[test]
    fn test_contact_declared_before_broader_topics() -> AssistantResult<()> {
        // "interested in hiring him" must resolve to contact, not interests,
        // so the specific rule has to come first.
        let base = KnowledgeBase::builtin()?;
        let position = |id: &str| base.topics.iter().position(|r| r.id.as_str() == id);
        assert!(position("contact") < position("interests"));
        assert!(position("greeting") == Some(base.topics.len() - 1));
        Ok(())
    }
}
