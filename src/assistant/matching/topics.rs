//! First-match topic scanning.

use crate::assistant::knowledge::topic::TopicRule;

/// Return the first rule (in declaration order) with any trigger keyword
/// contained in the normalized query.
///
/// Declaration order is the sole tie-break: when two rules could both
/// match, the earlier one wins. Canned responses are authored assuming
/// this precedence, so the order must never be resorted.
#[must_use]
pub fn match_topic<'a>(topics: &'a [TopicRule], query: &str) -> Option<&'a TopicRule> {
    topics.iter().find(|rule| rule.matches(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::core::ids::{ContentKeyError, TopicId};

    fn rules() -> Result<Vec<TopicRule>, ContentKeyError> {
        Ok(vec![
            TopicRule::new(TopicId::new("contact")?, ["hire", "contact"], "contact answer"),
            TopicRule::new(TopicId::new("skills")?, ["skill", "stack"], "skills answer"),
            TopicRule::new(TopicId::new("projects")?, ["project"], "projects answer"),
        ])
    }

    #[test]
    fn test_first_match_wins_by_declaration_order() -> Result<(), ContentKeyError> {
        let rules = rules()?;
        // "contact" and "skills" could both match; the earlier rule wins.
        let matched = match_topic(&rules, "how do i contact him about his skill set");
        assert_eq!(matched.map(|r| r.id.as_str()), Some("contact"));
        Ok(())
    }

    #[test]
    fn test_matches_unique_topic() -> Result<(), ContentKeyError> {
        let rules = rules()?;
        let matched = match_topic(&rules, "what is in your tech stack");
        assert_eq!(matched.map(|r| r.id.as_str()), Some("skills"));
        Ok(())
    }

    #[test]
    fn test_substring_containment_inside_words() -> Result<(), ContentKeyError> {
        let rules = rules()?;
        // "hire" sits inside "hired"; substring matching accepts that.
        let matched = match_topic(&rules, "can he be hired");
        assert_eq!(matched.map(|r| r.id.as_str()), Some("contact"));
        Ok(())
    }

    #[test]
    fn test_no_match_is_none() -> Result<(), ContentKeyError> {
        let rules = rules()?;
        assert!(match_topic(&rules, "asdkjasdkj").is_none());
        assert!(match_topic(&rules, "").is_none());
        Ok(())
    }
}
