use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to the default
    /// one. Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let fallback = Self::default_editor();
        let first = editor.clone().unwrap_or_else(|| fallback.clone());

        for ed in [first, fallback] {
            if let Ok(status) = Command::new(&ed).arg(path).status()
                && status.success()
            {
                return Ok(ed);
            }
        }

        Err(AppError::Config(format!(
            "Failed to edit configuration file {}",
            path.display()
        )))
    }
}
