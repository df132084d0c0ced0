//! Application configuration.
//!
//! A single JSON file in the platform data directory holds the settings the
//! CLI needs between runs — today that is the default owner identity used
//! for new tasks and for visibility filtering. Missing file means default
//! configuration; the interactive wizard in [`Config::init`] writes it.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Identity recorded as `owner` on new tasks and used to scope reads.
    /// `None` means tasks are created without an owner and all rows are
    /// visible.
    pub owner: Option<String>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory when needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Pre-fills current values as defaults so
    /// re-running it only changes what the user edits.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();

        let owner: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptOwnerName.to_string())
            .default(current.owner.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            owner: if owner.is_empty() { None } else { Some(owner) },
        })
    }
}
