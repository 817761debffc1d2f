use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::length::format_length;
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Utc;

/// Overwrite length (and optionally buffer type) of an existing cut.
/// Goes through the same edit flow as the form: select, change, submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update { id, length, tampon } = cmd {
        let mut session = open_session(cfg)?;
        session.refresh(Utc::now())?;

        session.begin_edit(*id)?;
        session.fields.length = length.clone();
        if let Some(t) = tampon {
            session.fields.buffer_type = t.as_str().to_string();
        }

        session.submit(Utc::now())?;

        if let Some(rec) = session.store().get(*id)? {
            success(format!(
                "Record #{} updated: {} m ({})",
                rec.id,
                format_length(rec.length),
                rec.buffer_type
            ));
        }
    }

    Ok(())
}
