//! Configuration for the quiz server and clients.
//!
//! Values are resolved in three layers: built-in defaults, the optional
//! `~/.config/persona-quiz/config.toml`, then environment variables.
//! Command-line flags are applied on top by the binaries.

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "persona-quiz";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Listen address of the quiz server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Endpoints used by the terminal client and the chat integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the quiz server
    pub server_url: String,
    /// Base URL of the Ollama chat API
    pub ollama_url: String,
    /// Chat model name
    pub model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl QuizConfig {
    /// Loads configuration from the default location and the environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            QuizError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Returns `~/.config/persona-quiz/config.toml`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Recognized keys: `QUIZ_HOST`, `QUIZ_PORT`, `QUIZ_SERVER_URL`,
    /// `OLLAMA_URL`, `OLLAMA_MODEL`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("QUIZ_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("QUIZ_PORT") {
            self.server.port = port.parse().map_err(|_| {
                QuizError::config(format!("QUIZ_PORT is not a valid port: '{port}'"))
            })?;
        }
        if let Some(url) = lookup("QUIZ_SERVER_URL") {
            self.client.server_url = url;
        }
        if let Some(url) = lookup("OLLAMA_URL") {
            self.client.ollama_url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.client.model = model;
        }
        Ok(())
    }
}
