use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;

/// Open the interactive form on the configured database.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    crate::ui::form::run(session, cfg)
}
