//! Unified application error type.
//! All modules (db, core, export, cli, ui) return AppError so every failure
//! ends up as one operator-visible message and never aborts the process.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Record #{0} not found")]
    RecordNotFound(i64),

    #[error("Invalid timestamp in database: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Please enter a length")]
    MissingLength,

    #[error("Length must be numeric: '{0}'")]
    InvalidLength(String),

    #[error("Invalid group '{0}'. Use all, 5..10 or other")]
    InvalidGroup(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
