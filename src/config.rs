// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::db::{self, APP};
use crate::error::{DiaryError, Result};

pub const CONFIG_ENV: &str = "HIRA_DIARY_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SQLite file to use instead of the platform data dir.
    pub database: Option<PathBuf>,
    pub chronological_history: bool,
}

impl FromStr for Config {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DiaryError::Config(e.to_string()))
    }
}

impl Config {
    /// Loads `explicit`, else the file named by `HIRA_DIARY_CONFIG`, else the
    /// default file in the platform config dir. Only the default may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match named {
            Some(path) => Self::read(&path),
            None => match default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "reading config");
        let content = fs::read_to_string(path).map_err(|e| {
            DiaryError::Config(format!("Failed to read config file at {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    /// `--db` wins over the config file, which wins over the platform default.
    pub fn database_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        match cli_override.or(self.database.as_deref()) {
            Some(p) => Ok(p.to_path_buf()),
            None => db::db_path(),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.toml"))
}
