/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, EnumIter, Hash, Eq, PartialEq)]
pub enum ConfigKey {
    Server,
    Directory,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| key.to_string() == s.to_lowercase())
            .ok_or_else(|| {
                let valid = ConfigKey::iter()
                    .map(|key| key.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow!("Invalid key: {}\nValid keys are: {}", s, valid)
            })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: Option<String>,
    pub directory: Option<String>,
}

impl Config {
    pub fn get(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::Server => self.server.as_ref(),
            ConfigKey::Directory => self.directory.as_ref(),
        }
    }

    /// An empty value clears the key.
    pub fn set(&mut self, key: ConfigKey, value: String) {
        let value = Some(value).filter(|v| !v.is_empty());
        match key {
            ConfigKey::Server => self.server = value,
            ConfigKey::Directory => self.directory = value,
        }
    }
}

pub fn get_config_file() -> Result<PathBuf> {
    let mut config_dir = dirs::config_dir().context("Could not find configuration directory")?;
    config_dir.push("estate");
    config_dir.push("config.toml");
    Ok(config_dir)
}

pub fn load_config_from(config_file: &Path) -> Result<Config> {
    if !config_file.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(config_file).with_context(|| {
        format!(
            "Failed to read configuration file {}",
            config_file.display()
        )
    })?;
    toml::from_str(&contents).context("Failed to parse configuration file")
}

pub fn save_config_to(config_file: &Path, config: &Config) -> Result<()> {
    if let Some(config_dir) = config_file.parent() {
        fs::create_dir_all(config_dir).context("Failed to create configuration directory")?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    fs::write(config_file, contents).context("Failed to write configuration file")
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_file()?)
}

/// Writes `value` when given, otherwise reads the key.
pub fn set_get_value(
    config_file: &Path,
    key: ConfigKey,
    value: Option<String>,
) -> Result<Option<String>> {
    let mut config = load_config_from(config_file)?;

    if let Some(value) = value {
        config.set(key, value);
        save_config_to(config_file, &config)?;
    }

    Ok(config.get(key).cloned())
}

pub fn set_get_value_from_string(key: &str, value: Option<String>) -> Result<Option<String>> {
    let key = key.parse::<ConfigKey>()?;
    set_get_value(&get_config_file()?, key, value)
}
