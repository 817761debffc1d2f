//! Record store: create/read/update/delete over the `records` table.

use crate::core::length::round2;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::utils::time::{parse_db_timestamp, to_db_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, Row, params};

/// Persistence seam used by the form session and the exporters.
pub trait RecordStore {
    /// Insert a record stamped with an explicit creation time.
    fn create_at(
        &mut self,
        length: f64,
        buffer_type: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<i64>;

    /// All records, oldest first.
    fn list(&self) -> AppResult<Vec<Record>>;

    fn get(&self, id: i64) -> AppResult<Option<Record>>;

    /// Overwrite length and buffer type. `created_at` is never touched.
    fn update(&mut self, id: i64, length: f64, buffer_type: &str) -> AppResult<()>;

    fn delete(&mut self, id: i64) -> AppResult<()>;

    /// Insert a record stamped with the current UTC time.
    fn create(&mut self, length: f64, buffer_type: &str) -> AppResult<i64> {
        self.create_at(length, buffer_type, Utc::now())
    }
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl RecordStore for SqliteStore {
    fn create_at(
        &mut self,
        length: f64,
        buffer_type: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<i64> {
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO records (length, buffer_type, created_at)
             VALUES (?1, ?2, ?3)",
        )?;
        stmt.execute(params![
            round2(length),
            buffer_type,
            to_db_timestamp(created_at)
        ])?;
        Ok(self.pool.conn.last_insert_rowid())
    }

    fn list(&self) -> AppResult<Vec<Record>> {
        let mut stmt = self.pool.conn.prepare_cached(
            "SELECT id, length, buffer_type, created_at
             FROM records
             ORDER BY created_at ASC, id ASC",
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        // rows written by other tools may use another text layout
        out.sort_by_key(|r| (r.created_at, r.id));
        Ok(out)
    }

    fn get(&self, id: i64) -> AppResult<Option<Record>> {
        let mut stmt = self.pool.conn.prepare_cached(
            "SELECT id, length, buffer_type, created_at FROM records WHERE id = ?1",
        )?;
        Ok(stmt.query_row([id], map_row).optional()?)
    }

    fn update(&mut self, id: i64, length: f64, buffer_type: &str) -> AppResult<()> {
        let changed = self.pool.conn.execute(
            "UPDATE records SET length = ?1, buffer_type = ?2 WHERE id = ?3",
            params![round2(length), buffer_type, id],
        )?;
        if changed == 0 {
            return Err(AppError::RecordNotFound(id));
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        let changed = self
            .pool
            .conn
            .execute("DELETE FROM records WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(AppError::RecordNotFound(id));
        }
        Ok(())
    }
}

/// Mapping DB → Record (shared by every query).
fn map_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    let created_str: String = row.get("created_at")?;
    let created_at = parse_db_timestamp(&created_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(created_str.clone())),
        )
    })?;

    Ok(Record {
        id: row.get("id")?,
        length: row.get("length")?,
        buffer_type: row.get("buffer_type")?,
        created_at,
    })
}
