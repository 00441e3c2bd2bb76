//! Project domain model.
//!
//! # Invariants
//! - `progress` is a whole percentage in 0..=100.
//! - Only `Active` projects are evaluated by the stalled-project rule.

use crate::model::team::MemberId;
use crate::model::ModelValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned project identifier.
pub type ProjectId = i64;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
}

/// A tracked initiative with completion progress and an optional deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// Whole percentage complete, 0..=100.
    pub progress: i64,
    pub assigned_to: Vec<MemberId>,
    pub deadline: Option<NaiveDate>,
    pub created_at: Option<String>,
}

impl Project {
    /// Creates a draft project in `Planning` with zero progress.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: None,
            status: ProjectStatus::Planning,
            progress: 0,
            assigned_to: Vec::new(),
            deadline: None,
            created_at: None,
        }
    }

    /// Checks write-side invariants before persistence.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        crate::model::require_non_empty(&self.name, "project", "name")?;
        if !(0..=100).contains(&self.progress) {
            return Err(ModelValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}
