//! Configuration management for the tasklite application.
//!
//! Settings live in `config.json` inside the platform data directory. A
//! missing file is not an error: every section is optional and falls back to
//! built-in defaults, so the application runs with no setup at all.
//!
//! ## Sections
//!
//! - **auth**: the email/password pair accepted by the sign-in gate
//! - **storage**: the file name of the task database
//!
//! ```rust,no_run
//! use tasklite::libs::config::Config;
//!
//! let config = Config::read()?;
//! let credentials = config.credentials();
//! println!("database file: {}", config.db_file_name());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::session::Credentials;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Password};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DB_FILE_NAME: &str = "tasks.db";

/// A section offered by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// File name of the SQLite database inside the data directory.
    pub db_file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Overrides the embedded sign-in pair. Stored as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the file at `path`, returning the default configuration if it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// The pair the sign-in gate accepts.
    pub fn credentials(&self) -> Credentials {
        self.auth.clone().unwrap_or_default()
    }

    pub fn db_file_name(&self) -> String {
        self.storage.clone().unwrap_or_default().db_file_name
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "auth".to_string(),
                name: Message::ConfigModuleAuth.to_string(),
            },
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "auth" => {
                    let default = config.credentials();
                    msg_print!(Message::ConfigModuleAuth);
                    let email: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAuthEmail.to_string())
                        .default(default.email)
                        .interact_text()?;
                    // An empty answer keeps the current password
                    let password = Password::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAuthPassword.to_string())
                        .allow_empty_password(true)
                        .interact()?;
                    let password = if password.is_empty() { default.password } else { password };
                    config.auth = Some(Credentials::new(email, password));
                }
                "storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    config.storage = Some(StorageConfig {
                        db_file_name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDbFileName.to_string())
                            .default(default.db_file_name)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
