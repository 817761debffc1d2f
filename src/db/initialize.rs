use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `records` table if missing. Safe to call on every start.
///
/// `AUTOINCREMENT` keeps ids from being reused after a delete.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            length      REAL NOT NULL,
            buffer_type TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_created_at ON records(created_at);
        "#,
    )?;
    Ok(())
}
