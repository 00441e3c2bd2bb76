//! Notification derivation engine.
//!
//! # Responsibility
//! - Derive the transient alert list (overdue tasks, near deadlines,
//!   off-track objectives, stalled projects) from loaded snapshots.
//! - Provide a repository-backed wrapper that assembles the inputs.
//!
//! # Invariants
//! - `derive_notifications` is pure: no I/O, no shared state, fresh output
//!   per call.
//! - Output order is fixed: overdue tasks, upcoming-deadline tasks,
//!   off-track objectives, stalled projects, each block in source iteration
//!   order.
//! - A task never appears in both the overdue and the upcoming block.

use crate::model::notification::{Notification, NotificationSource, NotificationTarget, Severity};
use crate::model::okr::{Okr, OkrStatus};
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::Task;
use crate::repo::okr_repo::OkrRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::TaskRepository;
use chrono::{Local, NaiveDate};
use log::warn;

/// How many days ahead a due date still counts as "deadline proche".
pub const UPCOMING_WINDOW_DAYS: i64 = 3;

/// An active project strictly below this progress counts as stalled.
pub const STALLED_PROGRESS_THRESHOLD: i64 = 10;

/// Derives the alert list for one snapshot of tasks, projects and
/// objectives, relative to `reference_date` ("today", day granularity).
///
/// Rules, concatenated in this order:
/// 1. tasks with a past due date and an open status (error);
/// 2. open tasks due within [`UPCOMING_WINDOW_DAYS`] days (warning);
/// 3. off-track objectives (warning);
/// 4. active projects under [`STALLED_PROGRESS_THRESHOLD`] percent (info).
///
/// Tasks without a due date are skipped by rules 1 and 2; empty inputs
/// produce an empty list.
pub fn derive_notifications(
    tasks: &[Task],
    projects: &[Project],
    okrs: &[Okr],
    reference_date: NaiveDate,
) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for task in tasks {
        if !task.is_open() {
            continue;
        }
        let Some(due_date) = task.due_date else {
            continue;
        };
        let days_late = (reference_date - due_date).num_days();
        if days_late > 0 {
            notifications.push(Notification {
                severity: Severity::Error,
                icon: "🔴",
                message: format!(
                    "Tâche en retard: {} ({} {})",
                    task.title,
                    days_late,
                    day_word(days_late)
                ),
                source: Some(NotificationSource::Task(task.id)),
                target: Some(NotificationTarget::Tasks),
            });
        }
    }

    for task in tasks {
        if !task.is_open() {
            continue;
        }
        let Some(due_date) = task.due_date else {
            continue;
        };
        let days_left = (due_date - reference_date).num_days();
        if (0..=UPCOMING_WINDOW_DAYS).contains(&days_left) {
            notifications.push(Notification {
                severity: Severity::Warning,
                icon: "⚠️",
                message: format!(
                    "Deadline proche: {} (dans {} {})",
                    task.title,
                    days_left,
                    day_word(days_left)
                ),
                source: Some(NotificationSource::Task(task.id)),
                target: Some(NotificationTarget::Tasks),
            });
        }
    }

    for okr in okrs {
        if okr.status == OkrStatus::OffTrack {
            notifications.push(Notification {
                severity: Severity::Warning,
                icon: "🎯",
                message: format!("OKR off-track: {}", okr.objective),
                source: Some(NotificationSource::Okr(okr.id)),
                target: Some(NotificationTarget::Okrs),
            });
        }
    }

    for project in projects {
        if project.status == ProjectStatus::Active && project.progress < STALLED_PROGRESS_THRESHOLD
        {
            notifications.push(Notification {
                severity: Severity::Info,
                icon: "📁",
                message: format!("Projet bloqué: {} ({}%)", project.name, project.progress),
                source: Some(NotificationSource::Project(project.id)),
                target: Some(NotificationTarget::Projects),
            });
        }
    }

    notifications
}

fn day_word(count: i64) -> &'static str {
    if count > 1 {
        "jours"
    } else {
        "jour"
    }
}

/// Per-severity totals for the notification-center badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

/// Groups a derived list into per-severity counts.
pub fn counts_by_severity(notifications: &[Notification]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for notification in notifications {
        match notification.severity {
            Severity::Error => counts.errors += 1,
            Severity::Warning => counts.warnings += 1,
            Severity::Info => counts.infos += 1,
        }
    }
    counts
}

/// Repository-backed facade over [`derive_notifications`].
///
/// Owns the three source repositories; a repository failure is logged and
/// treated as an empty snapshot for that category, so derivation itself
/// never fails.
pub struct NotificationService<T, P, O>
where
    T: TaskRepository,
    P: ProjectRepository,
    O: OkrRepository,
{
    tasks: T,
    projects: P,
    okrs: O,
}

impl<T, P, O> NotificationService<T, P, O>
where
    T: TaskRepository,
    P: ProjectRepository,
    O: OkrRepository,
{
    /// Creates a service using the provided repository implementations.
    pub fn new(tasks: T, projects: P, okrs: O) -> Self {
        Self {
            tasks,
            projects,
            okrs,
        }
    }

    /// Derives notifications for an explicit reference day.
    pub fn notifications_for(&self, reference_date: NaiveDate) -> Vec<Notification> {
        let tasks = self.tasks.list_tasks().unwrap_or_else(|err| {
            warn!("event=notification_inputs module=service status=degraded source=tasks error={err}");
            Vec::new()
        });
        let projects = self.projects.list_projects().unwrap_or_else(|err| {
            warn!("event=notification_inputs module=service status=degraded source=projects error={err}");
            Vec::new()
        });
        let okrs = self.okrs.list_okrs().unwrap_or_else(|err| {
            warn!("event=notification_inputs module=service status=degraded source=okrs error={err}");
            Vec::new()
        });

        derive_notifications(&tasks, &projects, &okrs, reference_date)
    }

    /// Derives notifications for the local calendar day.
    pub fn current_notifications(&self) -> Vec<Notification> {
        self.notifications_for(Local::now().date_naive())
    }
}
