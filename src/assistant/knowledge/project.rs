//! Project entities for ad-hoc lookup.

use serde::{Deserialize, Serialize};

use crate::assistant::core::ids::ProjectId;

/// A labeled metric attached to a project, kept as a list so rendering
/// order stays stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetric {
    /// Metric label, e.g. "monthly users".
    pub label: String,
    /// Metric value, e.g. "2,400".
    pub value: String,
}

impl ProjectMetric {
    /// Build a metric.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A project record eligible for direct lookup when no topic matches.
///
/// Read-only at runtime; never mutated after the knowledge base is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntity {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Human-facing project name.
    pub display_name: String,
    /// Technologies in display order; also used for keyword lookup.
    pub technologies: Vec<String>,
    /// One-sentence impact summary.
    pub impact_summary: String,
    /// Headline metrics in display order.
    pub metrics: Vec<ProjectMetric>,
}

impl ProjectEntity {
    /// True if the query mentions this project by display name, by the
    /// display name with spaces removed, or by one of its technologies.
    /// All comparisons are case-insensitive substring containment against
    /// an already-lowercased query.
    #[must_use]
    pub fn mentioned_in(&self, query: &str) -> bool {
        let name = self.display_name.trim().to_lowercase();
        if !name.is_empty() && query.contains(name.as_str()) {
            return true;
        }

        let squashed: String = name.split_whitespace().collect();
        if !squashed.is_empty() && query.contains(squashed.as_str()) {
            return true;
        }

        self.technologies
            .iter()
            .any(|tech| query.contains(tech.trim().to_lowercase().as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::core::ids::ContentKeyError;

    fn sample() -> Result<ProjectEntity, ContentKeyError> {
        Ok(ProjectEntity {
            id: ProjectId::new("nova-ledger")?,
            display_name: "Nova Ledger".to_string(),
            technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            impact_summary: "Budgeting without spreadsheets.".to_string(),
            metrics: vec![ProjectMetric::new("monthly users", "2,400")],
        })
    }

    #[test]
    fn test_mentioned_by_display_name() -> Result<(), ContentKeyError> {
        let project = sample()?;
        assert!(project.mentioned_in("tell me about nova ledger"));
        Ok(())
    }

    #[test]
    fn test_mentioned_by_squashed_name() -> Result<(), ContentKeyError> {
        let project = sample()?;
        assert!(project.mentioned_in("what is novaledger exactly?"));
        Ok(())
    }

    #[test]
    fn test_mentioned_by_technology() -> Result<(), ContentKeyError> {
        let project = sample()?;
        assert!(project.mentioned_in("anything written in rust?"));
        assert!(project.mentioned_in("do you know postgresql"));
        Ok(())
    }

    #[test]
    fn test_not_mentioned() -> Result<(), ContentKeyError> {
        let project = sample()?;
        assert!(!project.mentioned_in("what about the weather"));
        assert!(!project.mentioned_in(""));
        Ok(())
    }
}
