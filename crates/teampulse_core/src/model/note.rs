//! Note domain model.
//!
//! # Invariants
//! - `updated_at` is refreshed by the repository on every content update and
//!   drives the default note listing order.

use crate::model::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned note identifier.
pub type NoteId = i64;

/// A titled free-form text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Note {
    /// Creates a draft note.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Checks write-side invariants before persistence.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        crate::model::require_non_empty(&self.title, "note", "title")
    }
}
