//! Configuration system (layered: code > env > config file > defaults).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{FitError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// API key variables, highest priority first.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];
pub const MODEL_ENV_VAR: &str = "FITGENIE_MODEL";
pub const BASE_URL_ENV_VAR: &str = "GEMINI_BASE_URL";

/// Layered configuration for FitGenie.
///
/// Resolution order (later wins):
/// 1. Built-in defaults
/// 2. `~/.fitgenie/config.toml` (or an explicit path)
/// 3. Environment variables (after loading `.env`)
/// 4. Explicit setters
#[derive(Clone, PartialEq)]
pub struct FitConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl fmt::Debug for FitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FitConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl FitConfig {
    /// Load defaults, then the default config file if present, then the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Like [`FitConfig::load`], but an explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();
        match path {
            Some(path) => config.merge_file(path)?,
            None => {
                let path = default_config_path();
                if path.is_file() {
                    config.merge_file(&path)?;
                }
            }
        }
        config.apply_env();
        Ok(config)
    }

    /// Defaults overlaid with environment variables only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay a TOML config file.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|e| {
            FitError::Configuration(format!("{}: {}", path.display(), e.message()))
        })?;
        debug!(path = %path.display(), "Loaded config file");

        if let Some(key) = file.api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        Ok(())
    }

    /// Overlay environment variables, loading `.env` first if present.
    pub fn apply_env(&mut self) {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .find_map(|var| non_blank_env(var))
        {
            self.api_key = Some(key);
        }
        if let Some(model) = non_blank_env(MODEL_ENV_VAR) {
            self.model = model;
        }
        if let Some(url) = non_blank_env(BASE_URL_ENV_VAR) {
            self.base_url = url;
        }
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if an API key is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Value of `var`, treating set-but-blank as unset.
fn non_blank_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

/// `~/.fitgenie/config.toml`, falling back to the working directory without a home.
pub fn default_config_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".fitgenie"))
        .unwrap_or_else(|| PathBuf::from(".fitgenie"))
        .join("config.toml")
}
