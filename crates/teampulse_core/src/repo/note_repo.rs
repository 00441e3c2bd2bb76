//! Note repository contract and SQLite implementation.
//!
//! # Invariants
//! - Content updates refresh `updated_at` to a value strictly greater than
//!   every stored timestamp, so a touched note always sorts first even when
//!   the clock has not advanced since the last write.
//! - Listing is ordered by `updated_at DESC, id DESC`.

use crate::model::note::{Note, NoteId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at
FROM notes";

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Persists a draft note and returns the store-assigned id.
    fn create_note(&self, note: &Note) -> RepoResult<NoteId>;
    /// Replaces title and content, touching `updated_at`.
    fn update_note(&self, note: &Note) -> RepoResult<()>;
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists all notes, most recently updated first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository over an injected connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, note: &Note) -> RepoResult<NoteId> {
        note.validate()?;

        self.conn.execute(
            "INSERT INTO notes (title, content) VALUES (?1, ?2);",
            params![note.title.as_str(), note.content.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_note(&self, note: &Note) -> RepoResult<()> {
        note.validate()?;

        // The touch must outsort every earlier write, including rows created
        // in the same millisecond, so it never goes below max(updated_at)+1ms.
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?1,
                content = ?2,
                updated_at = max(
                    strftime('%Y-%m-%dT%H:%M:%f', 'now'),
                    (SELECT strftime('%Y-%m-%dT%H:%M:%f', max(updated_at), '+0.001 seconds')
                     FROM notes)
                )
             WHERE id = ?3;",
            params![note.title.as_str(), note.content.as_str(), note.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "note",
                id: note.id,
            });
        }

        Ok(())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} ORDER BY updated_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "note", id });
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
