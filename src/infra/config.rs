//! Layered configuration: defaults, then an optional TOML file named by
//! `CONFIG_PATH`, then `MODE` / `PORT` / `DEPRECATE_REST` from the environment.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub deprecate_rest: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: "server".into(),
            port: DEFAULT_PORT,
            deprecate_rest: false,
        }
    }
}

/// Keys accepted in the TOML file. All optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub mode: Option<String>,
    pub port: Option<u16>,
    pub deprecate_rest: Option<bool>,
}

impl FileConfig {
    pub fn parse(src: &str) -> anyhow::Result<Self> {
        toml::from_str(src).context("invalid config TOML")
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&src).with_context(|| format!("parsing config file {}", path.display()))
    }
}

impl Config {
    /// Defaults overlaid with the environment only.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::layered(FileConfig::default())
    }

    /// Defaults, then `CONFIG_PATH` (if set), then the environment.
    pub fn load() -> anyhow::Result<Self> {
        let file = match std::env::var("CONFIG_PATH") {
            Ok(p) if !p.trim().is_empty() => FileConfig::from_path(p.trim())?,
            _ => FileConfig::default(),
        };
        Self::layered(file)
    }

    fn layered(file: FileConfig) -> anyhow::Result<Self> {
        let mut cfg = Self::default();
        if let Some(mode) = file.mode {
            cfg.mode = mode;
        }
        if let Some(port) = file.port {
            cfg.port = port;
        }
        if let Some(deprecate_rest) = file.deprecate_rest {
            cfg.deprecate_rest = deprecate_rest;
        }

        if let Ok(mode) = std::env::var("MODE") {
            cfg.mode = mode;
        }
        if let Ok(port) = std::env::var("PORT") {
            cfg.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT: {port:?}"))?;
        }
        if let Ok(v) = std::env::var("DEPRECATE_REST") {
            cfg.deprecate_rest = !v.is_empty();
        }
        Ok(cfg)
    }

    pub fn is_stdio(&self) -> bool {
        self.mode == "stdio"
    }

    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.mode.as_str(), "server" | "stdio") {
            return Err(format!("Invalid MODE: {}. Must be 'server' or 'stdio'", self.mode));
        }
        if self.mode == "server" && self.port == 0 {
            return Err("PORT cannot be 0".into());
        }
        Ok(())
    }
}
