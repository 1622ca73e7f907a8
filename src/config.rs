//! TOML configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EumryeokConfig {
    /// Sexagenary name rendering.
    #[serde(default)]
    pub render: RenderToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default = "default_true")]
    pub intercalation_marker: bool,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            script: default_script(),
            intercalation_marker: true,
        }
    }
}

fn default_script() -> String {
    "korean".to_string()
}
fn default_true() -> bool {
    true
}

impl EumryeokConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse TOML config")
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), script = %config.render.script, "loaded config");
        Ok(config)
    }
}
