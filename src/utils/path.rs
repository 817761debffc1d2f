//! Path utilities: expand ~, build default export file names.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `kesimler_YYYYmmdd_HHMMSS.<ext>` inside `dir`.
pub fn default_export_path(dir: &Path, ext: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("kesimler_{}.{ext}", now.format("%Y%m%d_%H%M%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_name_uses_local_timestamp() {
        let now = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        let p = default_export_path(Path::new("out"), "xlsx", now);
        assert_eq!(p, Path::new("out").join("kesimler_20250309_140507.xlsx"));
    }

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("a/b.pdf"), PathBuf::from("a/b.pdf"));
    }
}
