//! Entry domain model.
//!
//! # Responsibility
//! - Define the term/definition record persisted by the glossary.
//! - Provide field-level validation used before any store mutation.
//!
//! # Invariants
//! - `id == Entry::UNASSIGNED_ID` marks an entry that has not been persisted.
//! - `term` and `definition` are never blank for a persisted entry.
//! - `term` never exceeds `Entry::TERM_MAX_CHARS` characters.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single field-level validation failure, addressed to the form field
/// that must be corrected before the entry can be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message belongs to (`term` or `definition`).
    pub field: &'static str,
    /// Human-readable message for redisplay next to the field.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A glossary entry: one term and the paragraph of text defining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned id, or `UNASSIGNED_ID` before the first save.
    pub id: i64,
    /// Single word or short phrase, unique across the glossary.
    pub term: String,
    /// Paragraph of text defining the corresponding term.
    pub definition: String,
}

impl Entry {
    /// Sentinel id for an entry that has not been persisted yet.
    pub const UNASSIGNED_ID: i64 = 0;

    /// Maximum number of characters allowed in `term`.
    pub const TERM_MAX_CHARS: usize = 255;

    /// Returns the blank template backing the "new entry" form.
    pub fn new() -> Self {
        Self {
            id: Self::UNASSIGNED_ID,
            term: String::new(),
            definition: String::new(),
        }
    }

    /// Builds an entry with explicit field values.
    ///
    /// Used by repository read paths and by callers assembling form input.
    /// This constructor does not validate; call `validate()` before writes.
    pub fn with_fields(id: i64, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Returns whether this entry has been assigned a store id.
    pub fn is_persisted(&self) -> bool {
        self.id != Self::UNASSIGNED_ID
    }

    /// Validates form input, returning one message per offending field.
    ///
    /// An empty vector means the entry is safe to hand to the repository.
    /// Blank checks treat whitespace-only values as empty.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.term.trim().is_empty() {
            errors.push(FieldError::new("term", "A Term is required"));
        } else if self.term.chars().count() > Self::TERM_MAX_CHARS {
            errors.push(FieldError::new(
                "term",
                format!(
                    "Term cannot be more than {} characters long",
                    Self::TERM_MAX_CHARS
                ),
            ));
        }

        if self.definition.trim().is_empty() {
            errors.push(FieldError::new("definition", "A Definition is required"));
        }

        errors
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}
