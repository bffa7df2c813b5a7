//! Project entity resolution.

use crate::assistant::knowledge::project::ProjectEntity;

/// Return the first project (in catalog order) mentioned by the normalized
/// query, by display name, squashed display name, or technology.
///
/// Only consulted after the topic matcher reports no match; a topic hit
/// always takes priority because it runs first. The only length guard is
/// a non-empty check.
#[must_use]
pub fn resolve_project<'a>(
    projects: &'a [ProjectEntity],
    query: &str,
) -> Option<&'a ProjectEntity> {
    if query.trim().is_empty() {
        return None;
    }

    projects.iter().find(|project| project.mentioned_in(query))
}
