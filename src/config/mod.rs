use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "data.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_buffer_type")]
    pub default_buffer_type: String,
    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_buffer_type() -> String {
    "Sabit".to_string()
}
fn default_blink_interval_ms() -> u64 {
    700
}
fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_buffer_type: default_buffer_type(),
            blink_interval_ms: default_blink_interval_ms(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.kesimlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kesimlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kesimlog.conf")
    }

    /// The database lives beside the executable; falls back to the
    /// config dir when the executable path cannot be resolved.
    pub fn database_file() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(Self::config_dir)
            .join(DB_FILE_NAME)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Write the configuration file (creating the config dir if needed).
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Directory where exports are proposed by default.
    pub fn export_dir(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.export_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str) -> PathBuf {
        let p = env::temp_dir().join(format!("kesimlog_cfg_{name}.conf"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = Config::load_from(&temp_conf("missing")).unwrap();
        assert_eq!(cfg.default_buffer_type, "Sabit");
        assert_eq!(cfg.blink_interval_ms, 700);
        assert!(cfg.database.ends_with(DB_FILE_NAME));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let p = temp_conf("partial");
        fs::write(&p, "database: /tmp/x.db\nblink_interval_ms: 350\n").unwrap();

        let cfg = Config::load_from(&p).unwrap();
        assert_eq!(cfg.database, "/tmp/x.db");
        assert_eq!(cfg.blink_interval_ms, 350);
        assert_eq!(cfg.export_dir, ".");
    }

    #[test]
    fn save_then_load_keeps_values() {
        let p = temp_conf("save");
        let cfg = Config {
            default_buffer_type: "Hareketli".into(),
            ..Config::default()
        };
        cfg.save_to(&p).unwrap();

        let back = Config::load_from(&p).unwrap();
        assert_eq!(back.default_buffer_type, "Hareketli");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let p = temp_conf("broken");
        fs::write(&p, "blink_interval_ms: [not, a, number]\n").unwrap();
        assert!(matches!(Config::load_from(&p), Err(AppError::ConfigLoad)));
    }
}
