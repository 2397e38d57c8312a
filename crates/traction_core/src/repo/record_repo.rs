//! Namespaced JSON record store and its SQLite implementation.
//!
//! # Responsibility
//! - Persist one JSON record per domain key under a process-wide prefix.
//! - Collapse every read failure to "absent" for ordinary callers while
//!   keeping a tagged outcome available internally.
//! - Generate entry identifiers for editable lists.
//!
//! # Invariants
//! - Saves are wholesale overwrites (last write wins), never merges.
//! - Oversized or unserializable values are rejected before any SQL runs.
//! - Corrupt stored text is reported and treated exactly like a missing key.

use crate::db::DbError;
use log::{debug, error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Namespace prepended to every domain key.
pub const DEFAULT_PREFIX: &str = "eos_traction_app_";
/// Per-record size ceiling, matching the usual browser local storage quota.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 5 * 1024 * 1024;

static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid record key regex"));

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-side failure taxonomy for record persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Key is empty or contains characters outside `[A-Za-z0-9_-]`.
    InvalidKey(String),
    /// Value could not be converted to JSON.
    Serialize(serde_json::Error),
    /// Serialized value is larger than the configured quota.
    QuotaExceeded {
        key: String,
        bytes: usize,
        limit: usize,
    },
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid record key `{key}`"),
            Self::Serialize(err) => write!(f, "record serialization failed: {err}"),
            Self::QuotaExceeded { key, bytes, limit } => write!(
                f,
                "record `{key}` is {bytes} bytes, exceeding the {limit} byte quota"
            ),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) | Self::QuotaExceeded { .. } => None,
        }
    }
}

impl StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "invalid_key",
            Self::Serialize(_) => "serialize_failed",
            Self::QuotaExceeded { .. } => "quota_exceeded",
            Self::Db(_) => "db_write_failed",
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Tagged result of reading one record.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Present(Value),
    /// Nothing was ever saved under this key.
    Missing,
    /// Stored text could not be read or parsed as JSON.
    Corrupt { reason: String },
}

impl LoadOutcome {
    /// Collapses `Missing` and `Corrupt` into `None`.
    pub fn into_option(self) -> Option<Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing | Self::Corrupt { .. } => None,
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Namespace combined with each domain key to form the stored key.
    pub prefix: String,
    /// Maximum serialized size of a single record.
    pub max_value_bytes: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
        }
    }
}

/// Key-value contract shared by every domain editor and the aggregator.
pub trait RecordStore {
    /// Writes `value` under `key`, replacing any previous record.
    fn try_save(&self, key: &str, value: &Value) -> StoreResult<()>;

    /// Reads the record under `key` with the failure reason preserved.
    fn load_outcome(&self, key: &str) -> LoadOutcome;

    /// Lists stored domain keys with the namespace prefix removed.
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Fire-and-forget save. Failures are logged and swallowed.
    fn save(&self, key: &str, value: &Value) {
        if let Err(err) = self.try_save(key, value) {
            report_save_failure(key, &err);
        }
    }

    /// Returns the record under `key`, or `None` if missing or corrupt.
    fn load(&self, key: &str) -> Option<Value> {
        self.load_outcome(key).into_option()
    }

    /// Serializes a typed record and saves it. Failures are logged and swallowed.
    fn save_as<T: Serialize>(&self, key: &str, record: &T) {
        let result = serde_json::to_value(record)
            .map_err(StoreError::from)
            .and_then(|value| self.try_save(key, &value));
        if let Err(err) = result {
            report_save_failure(key, &err);
        }
    }

    /// Loads a typed record; shape mismatches are reported and read as `None`.
    fn load_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.load(key)?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    "event=record_load module=repo status=error key={} error_code=shape_mismatch error={}",
                    key, err
                );
                None
            }
        }
    }
}

impl<T: RecordStore> RecordStore for &T {
    fn try_save(&self, key: &str, value: &Value) -> StoreResult<()> {
        (**self).try_save(key, value)
    }

    fn load_outcome(&self, key: &str) -> LoadOutcome {
        (**self).load_outcome(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }
}

fn report_save_failure(key: &str, err: &StoreError) {
    error!(
        "event=record_save module=repo status=error key={} error_code={} error={}",
        key,
        err.code(),
        err
    );
}

/// SQLite-backed record store over the `kv_records` table.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
    options: StoreOptions,
}

impl<'conn> SqliteRecordStore<'conn> {
    /// Creates a store with the default prefix and quota.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_options(conn, StoreOptions::default())
    }

    pub fn with_options(conn: &'conn Connection, options: StoreOptions) -> Self {
        Self { conn, options }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    fn storage_key(&self, key: &str) -> StoreResult<String> {
        if !KEY_RE.is_match(key) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(format!("{}{}", self.options.prefix, key))
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn try_save(&self, key: &str, value: &Value) -> StoreResult<()> {
        let storage_key = self.storage_key(key)?;
        let text = serde_json::to_string(value)?;
        if text.len() > self.options.max_value_bytes {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                bytes: text.len(),
                limit: self.options.max_value_bytes,
            });
        }

        self.conn.execute(
            "INSERT INTO kv_records (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![storage_key, text],
        )?;

        debug!(
            "event=record_save module=repo status=ok key={} bytes={}",
            key,
            text.len()
        );
        Ok(())
    }

    fn load_outcome(&self, key: &str) -> LoadOutcome {
        let storage_key = match self.storage_key(key) {
            Ok(storage_key) => storage_key,
            // Nothing can ever be saved under an invalid key.
            Err(_) => return LoadOutcome::Missing,
        };

        let stored = self
            .conn
            .query_row(
                "SELECT value FROM kv_records WHERE key = ?1;",
                [storage_key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional();

        let text = match stored {
            Ok(Some(text)) => text,
            Ok(None) => return LoadOutcome::Missing,
            Err(err) => {
                warn!(
                    "event=record_load module=repo status=error key={} error_code=db_read_failed error={}",
                    key, err
                );
                return LoadOutcome::Corrupt {
                    reason: err.to_string(),
                };
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => LoadOutcome::Present(value),
            Err(err) => {
                warn!(
                    "event=record_load module=repo status=error key={} error_code=corrupt_record error={}",
                    key, err
                );
                LoadOutcome::Corrupt {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let prefix = self.options.prefix.as_str();
        let mut stmt = self.conn.prepare(
            "SELECT key FROM kv_records
             WHERE substr(key, 1, length(?1)) = ?1
             ORDER BY key ASC;",
        )?;
        let mut rows = stmt.query([prefix])?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next()? {
            let key: String = row.get(0)?;
            if let Some(stripped) = key.strip_prefix(prefix) {
                keys.push(stripped.to_string());
            }
        }
        Ok(keys)
    }
}

/// Generates an entry identifier for editable lists.
///
/// UUIDv7: a millisecond timestamp followed by random bits, rendered as
/// 32 lowercase hex characters.
pub fn generate_unique_id() -> String {
    Uuid::now_v7().simple().to_string()
}
