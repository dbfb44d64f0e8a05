//! # Configuration
//!
//! Chinook configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and programmatic
//! overrides.
//!
//! There is deliberately almost nothing to configure. The store needs two
//! things: a directory to put its data file in, and a runtime mode. The
//! mode does double duty:
//!
//! 1. It selects the data file name (`chinook.db` vs `chinook-test.db`),
//!    so test runs never touch real data.
//! 2. It gates destructive resets: `initialize` refuses to run outside
//!    test mode unless forced.
//!
//! ## Resolution order
//!
//! 1. **Environment variables**: `CHINOOK__MODE`.
//! 2. **Config file** (optional TOML, via [`StoreConfig::from_file`]).
//! 3. **Compiled defaults**: `mode = default`, data file in the current
//!    directory.

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime mode. Selects the data file name and gates destructive resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Default,
    Test,
}

impl Mode {
    /// File name for the data file under this mode.
    pub fn data_file_name(&self) -> &'static str {
        match self {
            Mode::Default => "chinook.db",
            Mode::Test => "chinook-test.db",
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Mode::Test)
    }
}

/// Configuration for chinook, stored in `chinook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Runtime mode: "default" or "test".
    #[config(env = "CHINOOK__MODE", default = "default")]
    pub mode: Mode,

    /// Directory holding the data file.
    /// When absent, the current directory is used.
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Default,
            data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Resolve configuration from environment variables over compiled
    /// defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    /// Resolve configuration from environment variables over a TOML file
    /// over compiled defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::builder().env().file(path.as_ref()).load()?)
    }

    /// Full path of the data file selected by this configuration.
    pub fn data_path(&self) -> PathBuf {
        let dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(self.mode.data_file_name())
    }
}
