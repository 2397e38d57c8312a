//! `kv_records` schema for the record store.
//!
//! # Invariants
//! - The schema revision lives in `PRAGMA user_version`.
//! - A file stamped with a newer revision, or stamped with ours but lacking
//!   `kv_records`, is never written to.

use super::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Schema revision written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_KV_RECORDS: &str = "
CREATE TABLE IF NOT EXISTS kv_records (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Creates `kv_records` on a fresh file, or checks an existing one.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let found = stored_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return if has_records_table(conn)? {
            Ok(())
        } else {
            Err(DbError::NotARecordStore { user_version: found })
        };
    }

    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_KV_RECORDS)?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    info!(
        "event=schema_init module=db status=ok from_version={} to_version={}",
        found, SCHEMA_VERSION
    );
    Ok(())
}

fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

fn has_records_table(conn: &Connection) -> DbResult<bool> {
    Ok(conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_records');",
        [],
        |row| row.get(0),
    )?)
}
