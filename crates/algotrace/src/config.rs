// algotrace - Algorithm Trace Engine
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! User configuration stored as TOML, by default at `~/.algotrace.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use algotrace_common::DisplayLanguage;
use algotrace_engine::EngineConfig;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default delay between steps of `play`
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Persistent settings of the command-line front end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input limits and the operand seed
    pub engine: EngineConfig,
    /// How steps are presented
    pub display: DisplayConfig,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Language the reference implementation is shown in
    pub language: DisplayLanguage,
    /// Print the highlighted source lines under a step
    pub show_source: bool,
    /// Print the tracked variables under a step
    pub show_snapshot: bool,
    /// Delay between steps of `play`, in milliseconds
    pub interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: DisplayLanguage::default(),
            show_source: true,
            show_snapshot: true,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Config {
    /// `~/.algotrace.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| eyre::eyre!("Unable to determine home directory"))?;
        Ok(home.join(".algotrace.toml"))
    }

    /// Load the configuration at `path`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file as TOML: {path:?}"))?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Write the configuration to `path` as pretty TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {path:?}"))?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }
}
