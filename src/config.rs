//! Shell configuration

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV: &str = "NESTKV_CONFIG";

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each line when running interactively
    pub prompt: String,
    /// Initial capacity of the committed store
    pub initial_capacity: usize,
    /// Default log directive when RUST_LOG is unset
    pub log_level: String,
    /// Echo each input line before its reply
    pub echo: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: "> ".to_string(),
            initial_capacity: 1024,
            log_level: "warn".to_string(),
            echo: false,
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid configuration")
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config {}", path.display()))
    }

    /// Load from the file named by `NESTKV_CONFIG`, or use defaults
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
