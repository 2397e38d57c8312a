//! SQLite file backing the record store.
//!
//! Opening a connection through [`open_db`] or [`open_db_in_memory`] either
//! yields one with the `kv_records` table ready or fails before any record is
//! touched.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to open or prepare the record store file.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build; its records are left alone.
    SchemaTooNew { found: u32, supported: u32 },
    /// The file carries our schema revision but has no `kv_records` table.
    NotARecordStore { user_version: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "record store database error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "record store was written by a newer build (schema {found}, this build reads up to {supported})"
            ),
            Self::NotARecordStore { user_version } => write!(
                f,
                "database reports schema {user_version} but holds no kv_records table; not a record store"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::NotARecordStore { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
