//! Team-directory repository contract and SQLite implementation.

use crate::model::team::{MemberId, TeamMember};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    name,
    role,
    email,
    avatar,
    created_at
FROM team";

/// Repository interface for team-member CRUD operations.
pub trait TeamRepository {
    /// Persists a draft member and returns the store-assigned id.
    fn create_member(&self, member: &TeamMember) -> RepoResult<MemberId>;
    fn update_member(&self, member: &TeamMember) -> RepoResult<()>;
    fn get_member(&self, id: MemberId) -> RepoResult<Option<TeamMember>>;
    /// Lists all members, newest first.
    fn list_members(&self) -> RepoResult<Vec<TeamMember>>;
    fn delete_member(&self, id: MemberId) -> RepoResult<()>;
}

/// SQLite-backed team repository over an injected connection.
pub struct SqliteTeamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeamRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn create_member(&self, member: &TeamMember) -> RepoResult<MemberId> {
        member.validate()?;

        self.conn.execute(
            "INSERT INTO team (name, role, email, avatar)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                member.name.as_str(),
                member.role.as_str(),
                member.email.as_deref(),
                member.avatar.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_member(&self, member: &TeamMember) -> RepoResult<()> {
        member.validate()?;

        let changed = self.conn.execute(
            "UPDATE team
             SET name = ?1, role = ?2, email = ?3, avatar = ?4
             WHERE id = ?5;",
            params![
                member.name.as_str(),
                member.role.as_str(),
                member.email.as_deref(),
                member.avatar.as_deref(),
                member.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "team_member",
                id: member.id,
            });
        }

        Ok(())
    }

    fn get_member(&self, id: MemberId) -> RepoResult<Option<TeamMember>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn list_members(&self) -> RepoResult<Vec<TeamMember>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();

        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(members)
    }

    fn delete_member(&self, id: MemberId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM team WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "team_member",
                id,
            });
        }

        Ok(())
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<TeamMember> {
    Ok(TeamMember {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        email: row.get("email")?,
        avatar: row.get("avatar")?,
        created_at: row.get("created_at")?,
    })
}
