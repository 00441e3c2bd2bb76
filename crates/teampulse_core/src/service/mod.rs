//! Core use-case services.
//!
//! # Responsibility
//! - Derive notifications from loaded snapshots (the one piece of real
//!   business logic in this crate).
//! - Provide the in-memory search/filter/aggregate helpers the views use.
//!
//! # Invariants
//! - Everything here is pure computation over already-fetched rows; only
//!   `NotificationService` talks to repositories, and only to list them.

pub mod dashboard;
pub mod notification;
pub mod project_query;
pub mod task_query;
pub mod team_query;
