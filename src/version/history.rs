use std::path::Path;

use rusqlite::{Connection, Row};
use tracing::{debug, info};

use crate::version::error::HistoryError;
use crate::version::types::{CheckResult, CheckStatus, HistoryRow};

/// Append-only log of check results backed by SQLite
///
/// Owns a single connection for the lifetime of one command; the connection
/// closes when the store is dropped.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    /// Open the database at `db_path`, creating parent directories as needed
    pub fn open(db_path: &Path) -> Result<Self, HistoryError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening history database at {:?}", db_path);
        let conn = Connection::open(db_path)?;

        Ok(Self { conn })
    }

    #[cfg(test)]
    fn open_in_memory() -> Result<Self, HistoryError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Create the checks table if it does not exist yet. Safe to call on
    /// every startup.
    pub fn initialize(&self) -> Result<(), HistoryError> {
        debug!("Creating database schema");

        self.conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                product TEXT NOT NULL,
                installed_version TEXT,
                latest_version TEXT,
                update_available INTEGER,
                source_url TEXT NOT NULL,
                status TEXT NOT NULL,
                error_message TEXT
            )
            "#,
            [],
        )?;

        Ok(())
    }

    /// Persist `result` and return the id assigned to it
    pub fn insert(&self, result: &CheckResult) -> Result<i64, HistoryError> {
        self.conn.execute(
            r#"
            INSERT INTO checks (
                created_at, product, installed_version, latest_version,
                update_available, source_url, status, error_message
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            (
                &result.created_at,
                &result.product,
                &result.installed_version,
                &result.latest_version,
                result.update_available,
                &result.source_url,
                result.status.as_str(),
                &result.error_message,
            ),
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Stored check {} with status {}", id, result.status);
        Ok(id)
    }

    /// Up to `limit` most recent rows, newest first
    pub fn list_recent(&self, limit: u32) -> Result<Vec<HistoryRow>, HistoryError> {
        if limit == 0 {
            return Err(HistoryError::InvalidLimit);
        }

        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, created_at, product, installed_version, latest_version,
                   update_available, source_url, status, error_message
            FROM checks
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )?;

        let raw = stmt
            .query_map([limit], RawRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter().map(RawRow::into_history_row).collect()
    }
}

/// Row as read from SQLite, before the status column is parsed
struct RawRow {
    id: i64,
    created_at: String,
    product: String,
    installed_version: Option<String>,
    latest_version: Option<String>,
    update_available: Option<u8>,
    source_url: String,
    status: String,
    error_message: Option<String>,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            created_at: row.get(1)?,
            product: row.get(2)?,
            installed_version: row.get(3)?,
            latest_version: row.get(4)?,
            update_available: row.get(5)?,
            source_url: row.get(6)?,
            status: row.get(7)?,
            error_message: row.get(8)?,
        })
    }

    fn into_history_row(self) -> Result<HistoryRow, HistoryError> {
        let status = self
            .status
            .parse::<CheckStatus>()
            .map_err(|_| HistoryError::InvalidStatus(self.status.clone()))?;

        Ok(HistoryRow {
            id: self.id,
            check: CheckResult {
                created_at: self.created_at,
                product: self.product,
                installed_version: self.installed_version,
                latest_version: self.latest_version,
                update_available: self.update_available,
                source_url: self.source_url,
                status,
                error_message: self.error_message,
            },
        })
    }
}
