use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode or when it already exists)
///  - the SQLite database and the `records` table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();

    if !cli.test {
        if path.exists() {
            info(format!("Config file already present: {}", path.display()));
        } else {
            cfg.save_to(&path)?;
            success(format!("Config file: {}", path.display()));
        }
    }

    SqliteStore::open(&cfg.database)?;

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
