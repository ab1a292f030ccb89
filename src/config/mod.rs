use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON dataset backing the session. `None` means the embedded demo data.
    #[serde(default)]
    pub data_file: Option<String>,
    /// Employee id every command is scoped to unless --employee overrides it.
    #[serde(default)]
    pub default_employee: Option<u32>,
    #[serde(default = "default_hours_decimals")]
    pub hours_decimals: u8,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_highlight_today")]
    pub highlight_today: bool,
}

fn default_hours_decimals() -> u8 {
    2
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_highlight_today() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            default_employee: None,
            hours_decimals: default_hours_decimals(),
            separator_char: default_separator_char(),
            highlight_today: default_highlight_today(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timey")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timey")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timey.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize the configuration directory and file.
    ///
    /// With `custom_data` the new config points at that dataset (relative
    /// names land inside the config directory). Test mode skips the write.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_file = custom_data.map(|name| {
            let p = Path::new(&name);
            let resolved = if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            };
            resolved.to_string_lossy().to_string()
        });

        let config = Config {
            data_file,
            ..Default::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }
}
