//! Configuration management for taskmate.
//!
//! The configuration lives in `config.json` inside the application data
//! directory (see [`DataStorage`]). Every section is optional; a missing file or
//! a missing section means "use the defaults".
//!
//! ## Configuration Structure
//!
//! - **Server**: base URL of the remote task service
//! - **Storage**: file names of the two local task slots
//!
//! ## Environment Overrides
//!
//! `TASKMATE_API_URL` replaces the configured server URL in [`Config::read`].
//! Values from a `.env` file in the working directory are loaded by the binary
//! before the configuration is read.
//!
//! ```rust,no_run
//! use taskmate::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Task service: {}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::store::{MIRROR_SLOT_FILE, PRIMARY_SLOT_FILE};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use tracing::warn;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides [`ServerConfig::api_url`].
pub const API_URL_ENV: &str = "TASKMATE_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Trims whitespace and trailing slashes so paths can be appended with `/tasks`.
pub fn normalize_api_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Remote task service settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task API, without the trailing `/tasks`.
    ///
    /// Example: `http://localhost:5000/api`
    pub api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Local slot file names, relative to the data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    pub primary_file: String,
    pub mirror_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            primary_file: PRIMARY_SLOT_FILE.to_string(),
            mirror_file: MIRROR_SLOT_FILE.to_string(),
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads configuration from the data directory and applies the environment
    /// override.
    ///
    /// A missing file yields [`Config::default`]. A file that exists but cannot be
    /// parsed is an error.
    pub fn read() -> Result<Config> {
        Ok(Self::read_from(&DataStorage::new())?.with_env_overrides())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Same as [`Config::read_from`], but an unreadable file only logs a warning
    /// and yields the defaults.
    pub fn read_or_default(storage: &DataStorage) -> Config {
        Self::read_from(storage).unwrap_or_else(|err| {
            warn!(error = %err, "configuration unreadable, using defaults");
            Config::default()
        })
    }

    /// Replaces the server URL with `TASKMATE_API_URL` when it is set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(api_url) = env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty()) {
            self.server = Some(ServerConfig { api_url });
        }
        self
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective task service URL: the server section, or [`DEFAULT_API_URL`].
    pub fn api_url(&self) -> String {
        let url = self.server.as_ref().map_or(DEFAULT_API_URL, |server| server.api_url.as_str());
        normalize_api_url(url)
    }

    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    /// Runs the interactive configuration wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let config = Self::read_or_default(&DataStorage::new());
        let server = config.server.clone().unwrap_or_default();
        let storage = config.storage();

        msg_print!(Message::ConfigModuleServer);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerApiUrl.to_string())
            .default(server.api_url)
            .interact_text()?;

        msg_print!(Message::ConfigModuleStorage);
        let primary_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPrimarySlot.to_string())
            .default(storage.primary_file)
            .interact_text()?;
        let mirror_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMirrorSlot.to_string())
            .default(storage.mirror_file)
            .interact_text()?;

        Ok(Self {
            server: Some(ServerConfig { api_url }),
            storage: Some(StorageConfig { primary_file, mirror_file }),
        })
    }
}
