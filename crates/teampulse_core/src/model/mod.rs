//! Domain model for the team-productivity core.
//!
//! # Responsibility
//! - Define the typed records backing tasks, projects, OKRs, team members
//!   and notes.
//! - Define the transient notification record produced by the engine.
//!
//! # Invariants
//! - Every persisted entity is identified by a store-assigned `i64` id.
//! - Enum wire spellings are kebab-case (`in-progress`, `off-track`) to stay
//!   compatible with data written by earlier clients.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note;
pub mod notification;
pub mod okr;
pub mod project;
pub mod task;
pub mod team;

/// Validation failure raised by write models before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// Project progress is outside the 0..=100 percentage range.
    ProgressOutOfRange(i64),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress must be between 0 and 100, got {value}")
            }
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn require_non_empty(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ModelValidationError> {
    if value.trim().is_empty() {
        return Err(ModelValidationError::EmptyField { entity, field });
    }
    Ok(())
}
