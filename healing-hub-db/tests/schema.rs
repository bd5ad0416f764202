use healing_hub_db::schema::*;
use tempfile::TempDir;

#[test]
fn memory_database_has_current_version() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn file_database_is_created_and_reopened() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("glossary.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO terms (term, slug, category, niche, short_definition, definition)
             VALUES ('Reiki', 'reiki', 'Energy', 'Energy', 'Hands-on', 'Hands-on healing.')",
            [],
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM terms", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
    let versions: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |r| r.get(0))
        .unwrap();
    assert_eq!(versions, 1);
}

#[test]
fn newer_schema_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("glossary.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    let err = open_database(&path).unwrap_err();
    assert!(matches!(err, SchemaError::VersionMismatch { .. }));
}

#[test]
fn blank_definition_is_rejected_by_storage() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO terms (term, slug, category, niche, short_definition, definition)
         VALUES ('Reiki', 'reiki', 'Energy', 'Energy', '', '   ')",
        [],
    );
    assert!(result.is_err());
}
