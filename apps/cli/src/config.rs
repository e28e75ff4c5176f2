//! Layered configuration.
//!
//! Sources, lowest priority first: built-in defaults, `filegate.toml` in the
//! working directory (or the `--config` file), `FILEGATE_*` environment
//! variables, command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use filegate_validator::filename::System;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "filegate.toml";
pub const ENV_PREFIX: &str = "FILEGATE_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target system; `None` checks nothing.
    pub system: Option<System>,
    pub format: OutputFormat,
    /// Default `EnvFilter` directive when neither `-v`/`-q` nor `RUST_LOG` is set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: None,
            format: OutputFormat::Text,
            log_level: "warn".to_owned(),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Builds the layered figment without extracting it.
    pub fn figment(custom_config: Option<&Path>, overrides: &Overrides) -> Figment {
        let file = custom_config.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::globals(overrides))
    }

    /// Loads the merged configuration.
    ///
    /// An explicit `--config` file must exist. An unknown `system` in any
    /// layer is an error.
    pub fn load(custom_config: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        if let Some(path) = custom_config {
            ensure!(path.is_file(), "config file not found: {}", path.display());
        }

        Self::figment(custom_config, overrides)
            .extract()
            .context("invalid configuration")
    }
}
