use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::engine::Engine;

pub const CONFIG_FILE_NAME: &str = ".globalistrc.json";

/// Format of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `export const globals = [...] as const;` plus a key union type.
    Typescript,
    /// `pub static BROWSER_GLOBALS: &[&str]` plus a lookup helper.
    Rust,
    /// One name per line.
    Text,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Engines to collect from; launch order is also output order.
    #[serde(default = "default_engines")]
    pub engines: Vec<Engine>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    /// How long to wait for a spawned driver to accept connections.
    #[serde(default = "default_launch_timeout_secs")]
    pub launch_timeout_secs: u64,
    /// Per-engine driver binary overrides; defaults to the well-known
    /// binary names on PATH.
    #[serde(default)]
    pub driver_paths: DriverPaths,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPaths {
    pub chromium: Option<PathBuf>,
    pub firefox: Option<PathBuf>,
    pub webkit: Option<PathBuf>,
}

fn default_engines() -> Vec<Engine> {
    Engine::all()
}

fn default_output() -> PathBuf {
    PathBuf::from("src/globals.ts")
}

fn default_format() -> OutputFormat {
    OutputFormat::Typescript
}

fn default_launch_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engines: default_engines(),
            output: default_output(),
            format: default_format(),
            launch_timeout_secs: default_launch_timeout_secs(),
            driver_paths: DriverPaths::default(),
        }
    }
}

impl Config {
    /// Load the config file from the working directory, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns an error for an empty or duplicated engine list and for a
    /// zero launch timeout.
    pub fn validate(&self) -> Result<()> {
        if self.engines.is_empty() {
            anyhow::bail!("'engines' must name at least one engine");
        }
        for (i, engine) in self.engines.iter().enumerate() {
            if self.engines[..i].contains(engine) {
                anyhow::bail!("duplicate engine '{}' in 'engines'", engine);
            }
        }
        if self.launch_timeout_secs == 0 {
            anyhow::bail!("'launchTimeoutSecs' must be greater than zero");
        }
        Ok(())
    }

    pub fn launch_timeout(&self) -> Duration {
        Duration::from_secs(self.launch_timeout_secs)
    }

    /// Driver binary to spawn for `engine`, honoring config overrides.
    pub fn driver_binary(&self, engine: Engine) -> PathBuf {
        let configured = match engine {
            Engine::Chromium => &self.driver_paths.chromium,
            Engine::Firefox => &self.driver_paths.firefox,
            Engine::Webkit => &self.driver_paths.webkit,
        };
        configured
            .clone()
            .unwrap_or_else(|| PathBuf::from(engine.driver_binary()))
    }
}

pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(format!("{json}\n"))
}
