//! RecipeId value object
//!
//! Opaque identifier assigned to a recipe when it is created.
//! Generated ids are random UUID v4 strings, so collisions are negligible.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique recipe identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap an existing identifier string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters of the id, used where the full id is too noisy
    pub fn short(&self, len: usize) -> &str {
        match self.0.char_indices().nth(len) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecipeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuid_strings() {
        let id = RecipeId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(RecipeId::generate(), RecipeId::generate());
    }

    #[test]
    fn short_truncates_and_tolerates_short_ids() {
        let id = RecipeId::new("0123456789abcdef");
        assert_eq!(id.short(8), "01234567");

        let tiny = RecipeId::new("abc");
        assert_eq!(tiny.short(8), "abc");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecipeId::new("r-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"r-1\"");
    }
}
