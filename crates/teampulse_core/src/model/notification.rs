//! Transient notification record produced by the notification engine.
//!
//! # Responsibility
//! - Describe one user-visible alert: severity, glyph, message and where the
//!   UI should navigate when the alert is activated.
//!
//! # Invariants
//! - Notifications are never persisted; each derivation allocates a fresh
//!   list and the previous one is simply dropped.

use crate::model::okr::OkrId;
use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use serde::Serialize;

/// Alert severity, used for grouping and count badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Category a notification navigates to when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationTarget {
    Tasks,
    Projects,
    Okrs,
}

/// The record a notification was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSource {
    Task(TaskId),
    Project(ProjectId),
    Okr(OkrId),
}

/// One derived alert, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    /// Display glyph shown next to the message.
    pub icon: &'static str,
    /// Pre-formatted user-facing message.
    pub message: String,
    pub source: Option<NotificationSource>,
    pub target: Option<NotificationTarget>,
}
