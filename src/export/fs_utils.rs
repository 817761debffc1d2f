// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force` → ask the operator.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Sibling temp file used while writing `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "export".to_string());
    path.with_file_name(format!(".{name}.part"))
}

/// Write `bytes` next to `path` and rename over it, so the destination is
/// either the complete new file or untouched.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path_for(path);
    let res = fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .and_then(|_| fs::rename(&tmp, path));

    if let Err(e) = res {
        fs::remove_file(&tmp).ok();
        return Err(AppError::Io(e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn atomic_write_replaces_content_and_leaves_no_temp() {
        let dir = env::temp_dir().join("kesimlog_fs_utils_atomic");
        fs::create_dir_all(&dir).unwrap();
        let target = dir.join("out.bin");
        fs::write(&target, b"old").unwrap();

        write_atomic(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
        assert!(!temp_path_for(&target).exists());
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = env::temp_dir().join("kesimlog_fs_utils_fail");
        fs::create_dir_all(&dir).unwrap();
        // a directory cannot be replaced by a file
        let target = dir.join("occupied");
        fs::create_dir_all(&target).unwrap();

        assert!(write_atomic(&target, b"data").is_err());
        assert!(!temp_path_for(&target).exists());
        assert!(target.is_dir());
    }

    #[test]
    fn force_skips_the_prompt() {
        let p = env::temp_dir().join("kesimlog_fs_utils_force.txt");
        fs::write(&p, b"x").unwrap();
        assert!(ensure_writable(&p, true).is_ok());
    }
}
