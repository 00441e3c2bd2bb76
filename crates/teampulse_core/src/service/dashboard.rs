//! Dashboard aggregate counters.
//!
//! Pure aggregation over loaded snapshots; the rendering layer owns all
//! presentation of these numbers.

use crate::model::okr::{Okr, OkrStatus};
use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskStatus};

/// Headline numbers shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub active_projects: usize,
    pub on_track_okrs: usize,
    /// Completed-over-total percentage, rounded to the nearest whole number;
    /// 0 when there are no tasks.
    pub performance_pct: i64,
}

/// Computes dashboard counters from one snapshot of each collection.
pub fn summarize(tasks: &[Task], projects: &[Project], okrs: &[Okr]) -> DashboardSummary {
    let completed_tasks = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .count();
    let total_tasks = tasks.len();
    let performance_pct = if total_tasks == 0 {
        0
    } else {
        ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as i64
    };

    DashboardSummary {
        completed_tasks,
        total_tasks,
        active_projects: projects
            .iter()
            .filter(|project| project.status == ProjectStatus::Active)
            .count(),
        on_track_okrs: okrs
            .iter()
            .filter(|okr| okr.status == OkrStatus::OnTrack)
            .count(),
        performance_pct,
    }
}
