//! Objective (OKR) domain model.
//!
//! # Responsibility
//! - Define the objective record and its structured key results.
//!
//! # Invariants
//! - `key_results` is always the structured form in memory; older rows that
//!   stored it as JSON-encoded text are normalized at the repository
//!   boundary, never deeper in the call chain.
//! - Only `OffTrack` objectives trigger a notification.

use crate::model::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Store-assigned objective identifier.
pub type OkrId = i64;

/// Trajectory of an objective toward its key results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OkrStatus {
    OnTrack,
    AtRisk,
    OffTrack,
}

/// One measurable result under an objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub description: String,
    /// Current measured value, same unit as `target`.
    pub progress: f64,
    pub target: f64,
}

/// A strategic goal tracked over a quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Okr {
    pub id: OkrId,
    pub objective: String,
    pub key_results: Vec<KeyResult>,
    pub status: OkrStatus,
    pub quarter: Option<String>,
    pub created_at: Option<String>,
}

impl Okr {
    /// Creates a draft objective, on track and without key results.
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            id: 0,
            objective: objective.into(),
            key_results: Vec::new(),
            status: OkrStatus::OnTrack,
            quarter: None,
            created_at: None,
        }
    }

    /// Checks write-side invariants before persistence.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        crate::model::require_non_empty(&self.objective, "okr", "objective")
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyResult, Okr, OkrStatus};

    #[test]
    fn status_round_trips_kebab_case() {
        let json = serde_json::to_string(&OkrStatus::OffTrack).unwrap();
        assert_eq!(json, "\"off-track\"");
        let parsed: OkrStatus = serde_json::from_str("\"at-risk\"").unwrap();
        assert_eq!(parsed, OkrStatus::AtRisk);
    }

    #[test]
    fn key_results_parse_from_json_array() {
        let parsed: Vec<KeyResult> = serde_json::from_str(
            r#"[{"description":"signups","progress":120.0,"target":500.0}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].description, "signups");
    }

    #[test]
    fn blank_objective_is_rejected() {
        assert!(Okr::new("").validate().is_err());
    }
}
