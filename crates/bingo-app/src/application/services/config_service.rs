use anyhow::Result;
use bingo_domain::board::BoardSize;
use bingo_infrastructure::remote::FirestoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "app_config.json";
pub const DEFAULT_PRAISE_TITLE: &str = "Praise yourself";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Persistent configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub board_size: BoardSize,
    pub praise_title: String,
    pub remote: Option<FirestoreConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            board_size: BoardSize::default(),
            praise_title: DEFAULT_PRAISE_TITLE.to_string(),
            remote: None,
        }
    }
}

/// Application configuration service backed by `app_config.json`
pub struct ConfigService {
    config: RwLock<AppConfig>,
    config_path: PathBuf,
}

impl ConfigService {
    /// Load the config from `config_dir`; a missing or unreadable file
    /// yields the defaults
    pub fn new(config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir)?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<AppConfig>(&content).unwrap_or_else(|e| {
                warn!("Config file {:?} is invalid, using defaults: {}", config_path, e);
                AppConfig::default()
            })
        } else {
            AppConfig::default()
        };

        info!("Config loaded from: {:?}", config_path);
        info!(
            "Log level: {}, board size: {}",
            config.log_level.as_str(),
            config.board_size
        );

        Ok(Self {
            config: RwLock::new(config),
            config_path,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.config.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppConfig> {
        self.config.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> AppConfig {
        self.read().clone()
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.read().log_level
    }

    /// Persisted immediately; takes effect on next start
    pub fn set_log_level(&self, level: LogLevel) -> Result<()> {
        info!("Changing log level to: {}", level.as_str());
        self.update(|config| config.log_level = level)
    }

    pub fn board_size(&self) -> BoardSize {
        self.read().board_size
    }

    pub fn set_board_size(&self, size: BoardSize) -> Result<()> {
        info!("Changing board size to: {}", size);
        self.update(|config| config.board_size = size)
    }

    pub fn praise_title(&self) -> String {
        self.read().praise_title.clone()
    }

    pub fn remote(&self) -> Option<FirestoreConfig> {
        self.read().remote.clone()
    }

    fn update(&self, change: impl FnOnce(&mut AppConfig)) -> Result<()> {
        let content = {
            let mut config = self.write();
            change(&mut config);
            serde_json::to_string_pretty(&*config)?
        };
        std::fs::write(&self.config_path, content)?;
        info!("Config saved to: {:?}", self.config_path);
        Ok(())
    }
}
