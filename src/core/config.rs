/*
 * Manages application settings: how long alerts stay on screen, which slot
 * holds the generated-name history, and the log level. Settings live in
 * `settings.json` inside the application's local config directory; a missing
 * file or missing keys fall back to defaults.
 *
 * `ConfigManagerOperations` abstracts the storage so the application logic can
 * be tested with mock settings. `CoreConfigManager` is the file-backed
 * implementation and can be pointed at an explicit directory.
 */
use crate::core::history_store::DEFAULT_HISTORY_SLOT;
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const SETTINGS_FILENAME: &str = "settings.json";
pub const DEFAULT_ALERT_TIMEOUT_MS: u64 = 5555;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoProjectDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Configuration file is malformed: {e}"),
            ConfigError::NoProjectDirectory => {
                write!(f, "Could not determine project directory for configuration")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::NoProjectDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub alert_timeout_ms: u64,
    pub history_slot: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
            history_slot: DEFAULT_HISTORY_SLOT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppSettings {
    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.alert_timeout_ms)
    }

    /* Unknown level names fall back to `Info`. */
    pub fn log_level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }
}

pub trait ConfigManagerOperations: Send + Sync {
    fn load_settings(&self, app_name: &str) -> Result<AppSettings>;
    fn save_settings(&self, app_name: &str, settings: &AppSettings) -> Result<()>;
}

pub struct CoreConfigManager {
    config_dir_override: Option<PathBuf>,
}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {
            config_dir_override: None,
        }
    }

    /* Reads and writes settings in `dir` instead of the per-user config directory. */
    pub fn with_config_dir(dir: PathBuf) -> Self {
        CoreConfigManager {
            config_dir_override: Some(dir),
        }
    }

    fn settings_file_path(&self, app_name: &str) -> Result<PathBuf> {
        let config_dir = match &self.config_dir_override {
            Some(dir) => dir.clone(),
            None => path_utils::get_base_app_config_local_dir(app_name)
                .ok_or(ConfigError::NoProjectDirectory)?,
        };
        Ok(config_dir.join(SETTINGS_FILENAME))
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    fn load_settings(&self, app_name: &str) -> Result<AppSettings> {
        log::trace!("CoreConfigManager: Loading settings for app '{app_name}'");
        let file_path = self.settings_file_path(app_name)?;

        if !file_path.exists() {
            log::debug!("CoreConfigManager: Settings file {file_path:?} does not exist, using defaults.");
            return Ok(AppSettings::default());
        }

        let reader = BufReader::new(File::open(&file_path)?);
        let settings: AppSettings = serde_json::from_reader(reader)?;
        log::debug!("CoreConfigManager: Loaded settings {settings:?} from {file_path:?}.");
        Ok(settings)
    }

    fn save_settings(&self, app_name: &str, settings: &AppSettings) -> Result<()> {
        log::trace!("CoreConfigManager: Saving settings for app '{app_name}'");
        let file_path = self.settings_file_path(app_name)?;
        let writer = BufWriter::new(File::create(&file_path)?);
        serde_json::to_writer_pretty(writer, settings)?;
        log::debug!("CoreConfigManager: Saved settings to {file_path:?}.");
        Ok(())
    }
}
