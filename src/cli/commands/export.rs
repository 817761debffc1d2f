use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome};
use crate::ui::messages::{success, warning};
use crate::utils::path::{default_export_path, expand_tilde};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;

        let path = match file {
            Some(f) => expand_tilde(f),
            None => default_export_path(&cfg.export_dir(), format.extension(), Local::now()),
        };

        match ExportLogic::export(&store, *format, &path, *force)? {
            ExportOutcome::Written { path, rows } => success(format!(
                "{} export completed ({} records): {}",
                format.label(),
                rows,
                path.display()
            )),
            ExportOutcome::NothingToExport => warning("Nothing to export: no records found."),
        }
    }
    Ok(())
}
