use chrono::NaiveDate;
use teampulse_core::db::open_db_in_memory;
use teampulse_core::{
    RepoError, SqliteTaskRepository, Task, TaskPriority, TaskRepository, TaskStatus,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let mut task = Task::new("Préparer le board");
    task.description = Some("colonnes + labels".to_string());
    task.priority = TaskPriority::High;
    task.assigned_to = vec![2, 5];
    task.due_date = Some(day(2025, 7, 1));
    let id = repo.create_task(&task).unwrap();
    assert!(id > 0);

    let loaded = repo.get_task(id).unwrap().unwrap();
    assert_eq!(loaded.title, "Préparer le board");
    assert_eq!(loaded.description.as_deref(), Some("colonnes + labels"));
    assert_eq!(loaded.priority, TaskPriority::High);
    assert_eq!(loaded.status, TaskStatus::Todo);
    assert_eq!(loaded.assigned_to, vec![2, 5]);
    assert_eq!(loaded.due_date, Some(day(2025, 7, 1)));
    assert!(loaded.created_at.is_some());
}

#[test]
fn update_replaces_all_mutable_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let id = repo.create_task(&Task::new("draft")).unwrap();
    let mut task = repo.get_task(id).unwrap().unwrap();
    task.title = "ready".to_string();
    task.status = TaskStatus::InProgress;
    task.due_date = Some(day(2025, 8, 15));
    task.assigned_to = vec![1];
    repo.update_task(&task).unwrap();

    let loaded = repo.get_task(id).unwrap().unwrap();
    assert_eq!(loaded.title, "ready");
    assert_eq!(loaded.status, TaskStatus::InProgress);
    assert_eq!(loaded.due_date, Some(day(2025, 8, 15)));
    assert_eq!(loaded.assigned_to, vec![1]);
}

#[test]
fn update_status_moves_between_columns() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let id = repo.create_task(&Task::new("à faire")).unwrap();
    repo.update_task_status(id, TaskStatus::Done).unwrap();

    let loaded = repo.get_task(id).unwrap().unwrap();
    assert_eq!(loaded.status, TaskStatus::Done);
}

#[test]
fn missing_rows_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let mut ghost = Task::new("fantôme");
    ghost.id = 999;
    assert!(matches!(
        repo.update_task(&ghost).unwrap_err(),
        RepoError::NotFound { entity: "task", id: 999 }
    ));
    assert!(matches!(
        repo.update_task_status(999, TaskStatus::Done).unwrap_err(),
        RepoError::NotFound { .. }
    ));
    assert!(matches!(
        repo.delete_task(999).unwrap_err(),
        RepoError::NotFound { .. }
    ));
    assert!(repo.get_task(999).unwrap().is_none());
}

#[test]
fn list_returns_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let first = repo.create_task(&Task::new("premier")).unwrap();
    let second = repo.create_task(&Task::new("deuxième")).unwrap();

    let listed = repo.list_tasks().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second);
    assert_eq!(listed[1].id, first);
}

#[test]
fn delete_removes_the_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let id = repo.create_task(&Task::new("éphémère")).unwrap();
    repo.delete_task(id).unwrap();
    assert!(repo.get_task(id).unwrap().is_none());
    assert!(repo.list_tasks().unwrap().is_empty());
}

#[test]
fn blank_title_is_rejected_before_sql() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let err = repo.create_task(&Task::new("  ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_tasks().unwrap().is_empty());
}

#[test]
fn legacy_timestamp_due_dates_load_as_days() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (title, status, due_date)
         VALUES ('ancienne tâche', 'in-progress', '2025-06-05T00:00:00+00:00');",
        [],
    )
    .unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    let loaded = repo.list_tasks().unwrap();
    assert_eq!(loaded[0].due_date, Some(day(2025, 6, 5)));
    assert_eq!(loaded[0].status, TaskStatus::InProgress);
}
