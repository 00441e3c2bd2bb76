//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its status/priority enums.
//!
//! # Invariants
//! - `id` is assigned by the store; a draft built with `Task::new` carries a
//!   placeholder until the repository returns the real id.
//! - A task with `status == Done` is never considered for deadline alerts.

use crate::model::team::MemberId;
use crate::model::ModelValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
pub type TaskId = i64;

/// Task lifecycle state, mirroring the board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// Task urgency used for board sorting and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// A unit of actionable work, optionally dated and assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Legacy free-text assignee, kept for rows written by earlier clients.
    pub assignee: Option<String>,
    /// Team-member ids; replaces `assignee` going forward.
    pub assigned_to: Vec<MemberId>,
    /// Calendar day the task is due, no time-of-day component.
    pub due_date: Option<NaiveDate>,
    pub created_at: Option<String>,
}

impl Task {
    /// Creates a draft task with default status `Todo` and medium priority.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            assignee: None,
            assigned_to: Vec::new(),
            due_date: None,
            created_at: None,
        }
    }

    /// Checks write-side invariants before persistence.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        crate::model::require_non_empty(&self.title, "task", "title")
    }

    /// Whether the task still counts toward deadline rules.
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Done
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskStatus};
    use crate::model::ModelValidationError;

    #[test]
    fn new_task_starts_open() {
        let task = Task::new("write the report");
        assert!(task.is_open());
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn blank_title_is_rejected() {
        let task = Task::new("   ");
        assert_eq!(
            task.validate(),
            Err(ModelValidationError::EmptyField {
                entity: "task",
                field: "title"
            })
        );
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
