//! Layered configuration: built-in defaults, then an optional TOML file, then
//! `SANTE_*` environment variables. Command-line flags are applied on top by
//! the caller.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use sante_client::{ApiConfig, DEFAULT_BASE_URL};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "~/.config/sante/config.toml";
const DEFAULT_STORE_PATH: &str = "~/.local/share/sante/state.sqlite3";

/// Shape of the merged configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Backend prefix, e.g. `http://localhost:8080/api`.
  pub base_url:     String,
  /// SQLite file holding the token and the theme preference.
  pub store_path:   PathBuf,
  /// Request timeout in seconds; unset means no timeout.
  #[serde(default)]
  pub timeout_secs: Option<u64>,
}

impl Settings {
  /// Load settings. An explicitly named `file` must exist; the default
  /// location is optional.
  pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
    let (path, required) = match file {
      Some(path) => (path.to_path_buf(), true),
      None => (expand_tilde(Path::new(DEFAULT_CONFIG_PATH)), false),
    };

    let raw = config::Config::builder()
      .set_default("base_url", DEFAULT_BASE_URL)?
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .add_source(config::File::from(path.clone()).required(required))
      .add_source(config::Environment::with_prefix("SANTE"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    let mut settings: Settings = raw
      .try_deserialize()
      .context("failed to deserialise settings")?;
    settings.store_path = expand_tilde(&settings.store_path);
    Ok(settings)
  }

  pub fn api_config(&self) -> ApiConfig {
    ApiConfig {
      base_url: self.base_url.clone(),
      timeout:  self.timeout_secs.map(Duration::from_secs),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
