use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SubmitOutcome;
use crate::core::length::format_length;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Utc;

/// Record a new cut.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { length, tampon } = cmd {
        let mut session = open_session(cfg)?;

        if let Some(t) = tampon {
            session.fields.buffer_type = t.as_str().to_string();
        }
        session.fields.length = length.clone();
        let buffer = session.fields.buffer_type.clone();

        if let SubmitOutcome::Created(id) = session.submit(Utc::now())? {
            let stored = session
                .visible()
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.length)
                .unwrap_or_default();
            success(format!(
                "Record #{} added: {} m ({})",
                id,
                format_length(stored),
                buffer
            ));
        }
    }

    Ok(())
}
