//! Tests for configuration layering.

use std::sync::{Mutex, OnceLock};

use fitgenie::config::{FitConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use tempfile::TempDir;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 5] = [
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "API_KEY",
    "FITGENIE_MODEL",
    "GEMINI_BASE_URL",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clean_env() -> EnvGuard {
    let guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    guard
}

#[test]
fn gemini_key_wins_over_fallbacks() {
    let _lock = env_lock_guard();
    let _env = clean_env();
    std::env::set_var("API_KEY", "generic");
    std::env::set_var("GOOGLE_API_KEY", "google");
    std::env::set_var("GEMINI_API_KEY", "gemini");

    let config = FitConfig::from_env();

    assert_eq!(config.api_key(), Some("gemini"));
}

#[test]
fn generic_api_key_is_last_resort() {
    let _lock = env_lock_guard();
    let _env = clean_env();
    std::env::set_var("API_KEY", "generic");

    let config = FitConfig::from_env();

    assert_eq!(config.api_key(), Some("generic"));
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn env_overrides_config_file() {
    let _lock = env_lock_guard();
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "api_key = \"file-key\"\nmodel = \"file-model\"\nbase_url = \"http://file\"\n",
    )
    .unwrap();
    std::env::set_var("FITGENIE_MODEL", "env-model");

    let config = FitConfig::load_from(Some(&path)).unwrap();

    assert_eq!(config.api_key(), Some("file-key"));
    assert_eq!(config.model(), "env-model");
    assert_eq!(config.base_url(), "http://file");
}

#[test]
fn explicit_setters_override_everything() {
    let _lock = env_lock_guard();
    let _env = clean_env();
    std::env::set_var("GEMINI_API_KEY", "env-key");

    let mut config = FitConfig::from_env();
    config.set_api_key("code-key");
    config.set_base_url("http://localhost:9000");

    assert_eq!(config.api_key(), Some("code-key"));
    assert_eq!(config.base_url(), "http://localhost:9000");
}

#[test]
fn missing_explicit_config_file_fails_load() {
    let _lock = env_lock_guard();
    let _env = clean_env();
    let dir = TempDir::new().unwrap();

    assert!(FitConfig::load_from(Some(&dir.path().join("nope.toml"))).is_err());
}

#[test]
fn blank_model_and_base_url_keep_defaults() {
    let _lock = env_lock_guard();
    let _env = clean_env();
    std::env::set_var("FITGENIE_MODEL", "");
    std::env::set_var("GEMINI_BASE_URL", "   ");

    let config = FitConfig::from_env();

    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}
