//! Project repository contract and SQLite implementation.
//!
//! # Invariants
//! - Write paths call `Project::validate()` before SQL mutations.
//! - Listing returns newest-first (`id DESC`).

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::repo::{day_to_db, id_array_to_db, parse_day, parse_id_array, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    status,
    progress,
    assigned_to,
    deadline,
    created_at
FROM projects";

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    /// Persists a draft project and returns the store-assigned id.
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId>;
    fn update_project(&self, project: &Project) -> RepoResult<()>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Lists all projects, newest first.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

/// SQLite-backed project repository over an injected connection.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId> {
        project.validate()?;

        self.conn.execute(
            "INSERT INTO projects (name, description, status, progress, assigned_to, deadline)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                project.name.as_str(),
                project.description.as_deref(),
                status_to_db(project.status),
                project.progress,
                id_array_to_db(&project.assigned_to)?,
                day_to_db(project.deadline),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_project(&self, project: &Project) -> RepoResult<()> {
        project.validate()?;

        let changed = self.conn.execute(
            "UPDATE projects
             SET
                name = ?1,
                description = ?2,
                status = ?3,
                progress = ?4,
                assigned_to = ?5,
                deadline = ?6
             WHERE id = ?7;",
            params![
                project.name.as_str(),
                project.description.as_deref(),
                status_to_db(project.status),
                project.progress,
                id_array_to_db(&project.assigned_to)?,
                day_to_db(project.deadline),
                project.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "project",
                id: project.id,
            });
        }

        Ok(())
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "project",
                id,
            });
        }

        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid project status `{status_text}` in projects.status"
        ))
    })?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        status,
        progress: row.get("progress")?,
        assigned_to: parse_id_array(row.get("assigned_to")?, "projects", "assigned_to")?,
        deadline: parse_day(row.get("deadline")?),
        created_at: row.get("created_at")?,
    })
}

fn status_to_db(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "planning",
        ProjectStatus::Active => "active",
        ProjectStatus::Completed => "completed",
    }
}

fn parse_status(value: &str) -> Option<ProjectStatus> {
    match value {
        "planning" => Some(ProjectStatus::Planning),
        "active" => Some(ProjectStatus::Active),
        "completed" => Some(ProjectStatus::Completed),
        _ => None,
    }
}
