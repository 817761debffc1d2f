use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::length::format_length;
use crate::db::{RecordStore, SqliteStore};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        let rec = store.get(*id)?.ok_or(AppError::RecordNotFound(*id))?;

        let prompt = format!(
            "Delete record #{} ({} m, {})? This action is irreversible.",
            rec.id,
            format_length(rec.length),
            rec.buffer_type
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete(*id)?;
        success(format!("Record #{} deleted.", id));
    }

    Ok(())
}
