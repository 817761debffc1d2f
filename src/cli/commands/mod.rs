pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod ui;
pub mod update;

use crate::config::Config;
use crate::core::FormSession;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::BufferType;
use std::time::Duration;

/// Open the configured database and wrap it in a form session.
pub(crate) fn open_session(cfg: &Config) -> AppResult<FormSession<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    let default_buffer = BufferType::from_label(&cfg.default_buffer_type).unwrap_or_default();
    Ok(FormSession::new(
        store,
        default_buffer,
        Duration::from_millis(cfg.blink_interval_ms),
    ))
}
