//! Draft validation
//!
//! Checks a draft's fields before the store is ever involved: title and body
//! are both required and must be non-empty after trimming. Duplicate-title
//! detection is a store concern, not a field concern, and lives in the store.

/// Field of a draft that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Result of validating a draft's fields
#[derive(Debug, Clone, Default)]
pub struct DraftValidation {
    pub errors: Vec<FieldError>,
}

impl DraftValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failure messages, one per invalid field
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// Validate the title and body of a draft.
///
/// Whitespace-only values count as empty. The title uniqueness rule is NOT
/// checked here; it depends on collection state.
pub fn validate_draft(title: &str, body: &str) -> DraftValidation {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Title,
            message: "Title is required".to_string(),
        });
    }

    if body.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Body,
            message: "Body is required".to_string(),
        });
    }

    DraftValidation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let validation = validate_draft("Groceries", "milk, eggs");
        assert!(validation.is_valid());
        assert!(validation.messages().is_empty());
    }

    #[test]
    fn test_empty_title() {
        let validation = validate_draft("", "body text");
        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 1);
        assert_eq!(validation.errors[0].field, Field::Title);
        assert_eq!(validation.errors[0].message, "Title is required");
    }

    #[test]
    fn test_empty_body() {
        let validation = validate_draft("title", "");
        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 1);
        assert_eq!(validation.errors[0].field, Field::Body);
        assert_eq!(validation.errors[0].message, "Body is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let validation = validate_draft("   ", "\t\n");
        assert_eq!(validation.errors.len(), 2);
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_both_fields_reported() {
        let validation = validate_draft("", "");
        let fields: Vec<Field> = validation.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Title, Field::Body]);
    }

    #[test]
    fn test_interior_whitespace_is_fine() {
        let validation = validate_draft("  padded title  ", "  padded body  ");
        assert!(validation.is_valid());
    }
}
