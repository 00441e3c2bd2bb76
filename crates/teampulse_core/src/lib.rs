//! Core domain logic for TeamPulse, a team-productivity workspace.
//! This crate is the single source of truth for business invariants:
//! typed entity records, repository contracts over SQLite storage, and the
//! notification-derivation engine the dashboard and notification center
//! consume.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::notification::{
    Notification, NotificationSource, NotificationTarget, Severity,
};
pub use model::okr::{KeyResult, Okr, OkrId, OkrStatus};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use model::task::{Task, TaskId, TaskPriority, TaskStatus};
pub use model::team::{MemberId, TeamMember};
pub use model::ModelValidationError;
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::okr_repo::{OkrRepository, SqliteOkrRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::team_repo::{SqliteTeamRepository, TeamRepository};
pub use repo::{RepoError, RepoResult};
pub use service::dashboard::{summarize, DashboardSummary};
pub use service::notification::{
    counts_by_severity, derive_notifications, NotificationService, SeverityCounts,
    STALLED_PROGRESS_THRESHOLD, UPCOMING_WINDOW_DAYS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
