use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// BlogPost entity - a persisted blog record.
///
/// The id is assigned by the storage engine exactly once, at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// A blog post that has not been persisted yet.
///
/// Kept as a separate type so a record without a generated id is
/// unrepresentable as a `BlogPost`.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub name: String,
    pub description: String,
}

impl NewBlogPost {
    /// Build a post draft, rejecting empty fields.
    pub fn new(name: String, description: String) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::Validation(
                "name must not be empty".to_string(),
            ));
        }
        if description.is_empty() {
            return Err(DomainError::Validation(
                "description must not be empty".to_string(),
            ));
        }

        Ok(Self { name, description })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_fields() {
        let draft = NewBlogPost::new("Alice".to_string(), "first post".to_string()).unwrap();

        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.description, "first post");
    }

    #[test]
    fn rejects_empty_name() {
        let err = NewBlogPost::new(String::new(), "first post".to_string()).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_empty_description() {
        let err = NewBlogPost::new("Alice".to_string(), String::new()).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }
}
