use teampulse_core::db::open_db_in_memory;
use teampulse_core::{
    Note, NoteRepository, RepoError, SqliteNoteRepository, SqliteTeamRepository, TeamMember,
    TeamRepository,
};

#[test]
fn member_create_update_delete_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeamRepository::new(&conn);

    let mut member = TeamMember::new("Léna Morel", "Product Designer");
    member.email = Some("lena@example.com".to_string());
    let id = repo.create_member(&member).unwrap();

    let mut loaded = repo.get_member(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Léna Morel");
    assert_eq!(loaded.email.as_deref(), Some("lena@example.com"));

    loaded.role = "Design Lead".to_string();
    repo.update_member(&loaded).unwrap();
    assert_eq!(repo.get_member(id).unwrap().unwrap().role, "Design Lead");

    repo.delete_member(id).unwrap();
    assert!(repo.get_member(id).unwrap().is_none());
}

#[test]
fn member_without_role_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeamRepository::new(&conn);

    let err = repo
        .create_member(&TeamMember::new("Anonyme", ""))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn members_list_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTeamRepository::new(&conn);

    repo.create_member(&TeamMember::new("Premier", "Dev")).unwrap();
    let newest = repo.create_member(&TeamMember::new("Second", "Dev")).unwrap();

    let listed = repo.list_members().unwrap();
    assert_eq!(listed[0].id, newest);
}

#[test]
fn note_create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let id = repo
        .create_note(&Note::new("Compte-rendu", "points abordés..."))
        .unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.title, "Compte-rendu");
    assert_eq!(loaded.content, "points abordés...");
    assert!(loaded.created_at.is_some());
    assert!(loaded.updated_at.is_some());
}

#[test]
fn note_update_touches_updated_at_and_reorders_listing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let first = repo.create_note(&Note::new("première", "a")).unwrap();
    let second = repo.create_note(&Note::new("seconde", "b")).unwrap();

    // Force distinct timestamps, then touch the older note.
    conn.execute(
        "UPDATE notes SET updated_at = strftime('%Y-%m-%dT%H:%M:%f', 'now', '-1 hour')
         WHERE id = ?1;",
        [first],
    )
    .unwrap();
    let listed = repo.list_notes().unwrap();
    assert_eq!(listed[0].id, second);

    let mut note = repo.get_note(first).unwrap().unwrap();
    note.content = "a (relu)".to_string();
    repo.update_note(&note).unwrap();

    let listed = repo.list_notes().unwrap();
    assert_eq!(listed[0].id, first, "touched note should move to the top");
    assert_eq!(listed[0].content, "a (relu)");
}

#[test]
fn touching_a_note_outsorts_one_created_in_the_same_second() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    // Both creates and the touch can land within one clock tick; the touch
    // must still end up with the greatest updated_at.
    let first = repo.create_note(&Note::new("première", "a")).unwrap();
    let second = repo.create_note(&Note::new("seconde", "b")).unwrap();

    let mut note = repo.get_note(first).unwrap().unwrap();
    note.content = "a (relu)".to_string();
    repo.update_note(&note).unwrap();

    let listed = repo.list_notes().unwrap();
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[1].id, second);
}

#[test]
fn note_missing_rows_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let mut ghost = Note::new("fantôme", "");
    ghost.id = 123;
    assert!(matches!(
        repo.update_note(&ghost).unwrap_err(),
        RepoError::NotFound { entity: "note", id: 123 }
    ));
    assert!(matches!(
        repo.delete_note(123).unwrap_err(),
        RepoError::NotFound { .. }
    ));
}
