//! Team-member domain model.

use crate::model::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned team-member identifier, referenced by task/project
/// `assigned_to` lists.
pub type MemberId = i64;

/// A person in the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub created_at: Option<String>,
}

impl TeamMember {
    /// Creates a draft member record.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            role: role.into(),
            email: None,
            avatar: None,
            created_at: None,
        }
    }

    /// Checks write-side invariants before persistence.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        crate::model::require_non_empty(&self.name, "team_member", "name")?;
        crate::model::require_non_empty(&self.role, "team_member", "role")
    }
}
