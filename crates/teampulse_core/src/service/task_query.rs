//! In-memory task search and filtering.
//!
//! # Responsibility
//! - Case-insensitive substring search over title/description/assignee.
//! - Combined filtering by assignee, status, priority and due-date window.
//!
//! # Invariants
//! - All functions operate on an already-loaded snapshot; no I/O.
//! - Date windows are inclusive at both ends.

use crate::model::task::{Task, TaskPriority, TaskStatus};
use chrono::{Days, NaiveDate};

/// Relative due-date windows offered by the task list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Due within the next 7 days, today included.
    ThisWeek,
    /// Due within the next 30 days, today included.
    ThisMonth,
    /// Past due and still open.
    Overdue,
}

/// Combined task filter; `None` fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub assignee: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub date_range: Option<DateRange>,
}

/// Returns tasks whose title, description or legacy assignee contains
/// `query`, case-insensitively. An empty query matches everything.
pub fn search_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.iter().collect();
    }

    tasks
        .iter()
        .filter(|task| {
            contains_ci(&task.title, &needle)
                || task
                    .description
                    .as_deref()
                    .is_some_and(|text| contains_ci(text, &needle))
                || task
                    .assignee
                    .as_deref()
                    .is_some_and(|text| contains_ci(text, &needle))
        })
        .collect()
}

/// Applies all filter dimensions; date windows are computed relative to
/// `reference_date`.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: &TaskFilter,
    reference_date: NaiveDate,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| {
            if let Some(assignee) = filter.assignee.as_deref() {
                if task.assignee.as_deref() != Some(assignee) {
                    return false;
                }
            }
            if let Some(status) = filter.status {
                if task.status != status {
                    return false;
                }
            }
            if let Some(priority) = filter.priority {
                if task.priority != priority {
                    return false;
                }
            }
            if let Some(range) = filter.date_range {
                if !matches_date_range(task, range, reference_date) {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn matches_date_range(task: &Task, range: DateRange, reference_date: NaiveDate) -> bool {
    let Some(due_date) = task.due_date else {
        return false;
    };

    match range {
        DateRange::ThisWeek => within_window(due_date, reference_date, 7),
        DateRange::ThisMonth => within_window(due_date, reference_date, 30),
        DateRange::Overdue => due_date < reference_date && task.is_open(),
    }
}

fn within_window(due_date: NaiveDate, reference_date: NaiveDate, days: u64) -> bool {
    let window_end = reference_date + Days::new(days);
    due_date >= reference_date && due_date <= window_end
}

fn contains_ci(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
