use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory holding the "MM MonthName" export folders
    pub export_root: String,
    /// Empty means `--name` is required on every report
    #[serde(default)]
    pub default_employee: String,
    #[serde(default = "default_export_extension")]
    pub export_extension: String,
    #[serde(default = "default_files_per_report")]
    pub files_per_report: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_export_extension() -> String {
    "csv".to_string()
}
fn default_files_per_report() -> usize {
    2
}
fn default_separator_char() -> String {
    "*".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_root: Self::config_dir()
                .join("exports")
                .to_string_lossy()
                .to_string(),
            default_employee: String::new(),
            export_extension: default_export_extension(),
            files_per_report: default_files_per_report(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Export root with `~` expanded
    pub fn export_root_path(&self) -> PathBuf {
        expand_tilde(&self.export_root)
    }

    /// Load configuration from `path` (or the standard file), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write `self` to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the configuration file with defaults, keeping an existing one
    /// untouched unless `force` is set. Returns the written path.
    pub fn init_all(
        path: Option<&Path>,
        export_root: Option<String>,
        employee: Option<String>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let mut cfg = Config::default();
        if let Some(root) = export_root {
            cfg.export_root = root;
        }
        if let Some(name) = employee {
            cfg.default_employee = name;
        }

        cfg.save(&path)?;
        Ok(path)
    }
}
