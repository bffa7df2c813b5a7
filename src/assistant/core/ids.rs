//! Identifier types for the assistant.
//!
//! Runtime identifiers (sessions, turns) are UUID newtypes. Content
//! identifiers (topics, projects) are validated string keys owned by the
//! knowledge base authors.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declare a UUID newtype with a consistent API.
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            /// Create a new random identifier.
            #[inline]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[inline]
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Borrow the underlying UUID.
            #[inline]
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_uuid_id!(
    /// Identifier for a conversation session (one widget instance).
    SessionId
);

define_uuid_id!(
    /// Identifier for a single transcript turn.
    TurnId
);

// ===== Content keys =========================================================

/// Maximum accepted length for a content key.
const KEY_MAX_LEN: usize = 64;

/// Errors returned when validating a content key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKeyError {
    /// Empty (or whitespace-only) key.
    Empty,
    /// Exceeds the maximum accepted length.
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length received.
        got: usize,
    },
    /// Contains a disallowed character.
    InvalidChar {
        /// The invalid character.
        ch: char,
        /// The index where it was found.
        index: usize,
    },
}

impl fmt::Display for ContentKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "content key must not be empty"),
            Self::TooLong { max, got } => write!(f, "content key too long: got {got}, max {max}"),
            Self::InvalidChar { ch, index } => {
                write!(f, "content key contains invalid character {ch:?} at index {index}")
            }
        }
    }
}

impl std::error::Error for ContentKeyError {}

/// Validate a key: non-empty, bounded, conservative set `[a-z0-9_-]`.
fn check_key(s: &str) -> Result<(), ContentKeyError> {
    if s.is_empty() {
        return Err(ContentKeyError::Empty);
    }
    if s.len() > KEY_MAX_LEN {
        return Err(ContentKeyError::TooLong {
            max: KEY_MAX_LEN,
            got: s.len(),
        });
    }

    for (i, ch) in s.chars().enumerate() {
        let ok = ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '-');
        if !ok {
            return Err(ContentKeyError::InvalidChar { ch, index: i });
        }
    }

    Ok(())
}

/// Declare a validated string-key newtype.
macro_rules! define_content_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Build a validated key.
            ///
            /// Rules:
            /// - Non-empty after trimming.
            /// - Max length limited.
            /// - Conservative ASCII set: `[a-z0-9_-]`.
            ///
            /// # Errors
            /// Returns `ContentKeyError` if the input is empty, too long, or
            /// contains invalid characters.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, ContentKeyError> {
                let s = raw.as_ref().trim();
                check_key(s)?;
                Ok(Self(s.to_owned()))
            }

            /// Re-run key validation (serde deserialization bypasses `new`).
            ///
            /// # Errors
            /// Returns `ContentKeyError` if the stored key is invalid.
            pub fn validate(&self) -> Result<(), ContentKeyError> {
                check_key(&self.0)
            }

            /// Borrow as `&str`.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ContentKeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ContentKeyError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_content_key!(
    /// Identifier for a topic rule in the knowledge base.
    TopicId
);

define_content_key!(
    /// Identifier for a project entity in the catalog.
    ProjectId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
        assert_ne!(TurnId::new(), TurnId::new());
    }

    #[test]
    fn test_uuid_id_display_round_trip() -> Result<(), uuid::Error> {
        let id = TurnId::new();
        let parsed = TurnId::from_str(&id.to_string())?;
        assert_eq!(id, parsed);
        Ok(())
    }

    #[test]
    fn test_content_key_accepts_conservative_ascii() -> Result<(), ContentKeyError> {
        let id = TopicId::new("skills")?;
        assert_eq!(id.as_str(), "skills");
        let id = ProjectId::new("  nova-ledger  ")?;
        assert_eq!(id.as_str(), "nova-ledger");
        Ok(())
    }

    #[test]
    fn test_content_key_rejects_empty() {
        assert_eq!(TopicId::new("   "), Err(ContentKeyError::Empty));
    }

    #[test]
    fn test_content_key_rejects_uppercase_and_spaces() {
        assert!(matches!(
            TopicId::new("Skills"),
            Err(ContentKeyError::InvalidChar { ch: 'S', index: 0 })
        ));
        assert!(matches!(
            ProjectId::new("nova ledger"),
            Err(ContentKeyError::InvalidChar { ch: ' ', .. })
        ));
    }

    #[test]
    fn test_content_key_rejects_overlong() {
        let raw = "a".repeat(KEY_MAX_LEN + 1);
        assert!(matches!(
            TopicId::new(raw),
            Err(ContentKeyError::TooLong { .. })
        ));
    }
}
