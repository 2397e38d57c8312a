use rusqlite::Connection;
use traction_core::db::schema::SCHEMA_VERSION;
use traction_core::db::{open_db, open_db_in_memory, DbError};
use traction_core::{RecordStore, SqliteRecordStore};

#[test]
fn fresh_store_gets_records_table_and_version() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), SCHEMA_VERSION);
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_records';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn reopening_store_file_keeps_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traction.db");

    let first = open_db(&path).unwrap();
    SqliteRecordStore::new(&first).save("issues", &serde_json::json!([]));
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(user_version(&second), SCHEMA_VERSION);
    assert_eq!(
        SqliteRecordStore::new(&second).load("issues"),
        Some(serde_json::json!([]))
    );
}

#[test]
fn store_written_by_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn foreign_database_with_matching_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other-app.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(&format!(
        "CREATE TABLE notes (id INTEGER PRIMARY KEY); PRAGMA user_version = {SCHEMA_VERSION};"
    ))
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::NotARecordStore { user_version } if user_version == SCHEMA_VERSION));
    assert!(err.to_string().contains("not a record store"));
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
