//! Session context log for follow-up resolution.

/// Ordered history of normalized queries for the active session.
///
/// Grows monotonically for the session lifetime and is cleared together
/// with the transcript. The single follow-up special case in
/// [`ContextLog::wants_project_detail`] is the only code path that reads
/// history; everything else in the matcher stays stateless.
#[derive(Clone, Debug, Default)]
pub struct ContextLog {
    entries: Vec<String>,
}

impl ContextLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a normalized query. Always appends, never deduplicates.
    pub fn append(&mut self, query: impl Into<String>) {
        self.entries.push(query.into());
    }

    /// The query before the most recent one, if at least two exist.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries
            .get(self.entries.len() - 2)
            .map(String::as_str)
    }

    /// Number of recorded queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no queries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The follow-up special case: the previous query mentioned projects
    /// and the current one asks for more.
    ///
    /// `current` is passed explicitly because the caller appends the
    /// current query before resolving, so [`ContextLog::previous`] already
    /// names the turn before it.
    #[must_use]
    pub fn wants_project_detail(&self, current: &str) -> bool {
        self.previous()
            .is_some_and(|prev| prev.contains("project"))
            && current.contains("more")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_always_appends() {
        let mut log = ContextLog::new();
        log.append("same");
        log.append("same");
        log.append("same");
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_previous_needs_two_entries() {
        let mut log = ContextLog::new();
        assert_eq!(log.previous(), None);
        log.append("first");
        assert_eq!(log.previous(), None);
        log.append("second");
        assert_eq!(log.previous(), Some("first"));
        log.append("third");
        assert_eq!(log.previous(), Some("second"));
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut log = ContextLog::new();
        log.append("first");
        log.append("second");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.previous(), None);
    }

    #[test]
    fn test_wants_project_detail() {
        let mut log = ContextLog::new();
        log.append("tell me about projects");
        log.append("give me more");
        assert!(log.wants_project_detail("give me more"));
        // Previous query must mention projects.
        let mut log = ContextLog::new();
        log.append("what are his skills");
        log.append("give me more");
        assert!(!log.wants_project_detail("give me more"));
        // Current query must ask for more.
        let mut log = ContextLog::new();
        log.append("tell me about projects");
        log.append("what about education");
        assert!(!log.wants_project_detail("what about education"));
    }
}
