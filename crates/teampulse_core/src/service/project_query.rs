//! In-memory project search and filtering.

use crate::model::project::{Project, ProjectStatus};
use chrono::{Days, NaiveDate};

/// Returns projects whose name or description contains `query`,
/// case-insensitively. An empty query matches everything.
pub fn search_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return projects.iter().collect();
    }

    projects
        .iter()
        .filter(|project| {
            project.name.to_lowercase().contains(&needle)
                || project
                    .description
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filters by status and, optionally, by "deadline within the next 7 days"
/// relative to `reference_date` (both ends inclusive). Projects without a
/// deadline never match the deadline filter.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: Option<ProjectStatus>,
    deadline_soon: bool,
    reference_date: NaiveDate,
) -> Vec<&'a Project> {
    let week_end = reference_date + Days::new(7);

    projects
        .iter()
        .filter(|project| {
            if let Some(wanted) = status {
                if project.status != wanted {
                    return false;
                }
            }
            if deadline_soon {
                match project.deadline {
                    Some(deadline) => {
                        if deadline < reference_date || deadline > week_end {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        })
        .collect()
}
