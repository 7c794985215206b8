//! Optional TOML configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cipher_gen::GeneratorConfig;
use serde::Deserialize;
use tracing::debug;

/// Top-level file layout: a `[generator]` table, everything optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
        config
            .generator
            .validate()
            .with_context(|| format!("invalid config in {}", path.display()))?;
        debug!(?config, "loaded config");
        Ok(config)
    }
}
