use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::CoreError;
use crate::core::measurement::Mode;
use crate::debug_log;

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.quantum_toy\config.toml on Windows; ~/.quantum_toy/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".quantum_toy").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToyConfig {
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub json: bool,
    pub color: bool,
    pub tally_count: u64,
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Operator,
            seed: None,
            json: false,
            color: true,
            tally_count: 1000,
        }
    }
}

impl ToyConfig {
    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg: ToyConfig = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(cfg)
    }

    /// The file at `path` if it exists, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => {
                debug_log!("loading config from {}", p.display());
                Self::from_toml_file(p)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tally_count == 0 {
            return Err(CoreError::invalid_config("tally_count must be at least 1"));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }
}
