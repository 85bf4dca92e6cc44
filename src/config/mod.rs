//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Works API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Works API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the works endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Contact address advertised in the user agent (polite pool)
    #[serde(default = "default_mailto")]
    pub mailto: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mailto: default_mailto(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.crossref.org/works".to_string()
}

fn default_mailto() -> Option<String> {
    std::env::var("CROSSREF_MAILTO").ok()
}

/// Load configuration from a file, with `CITEFETCH_*` environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("CITEFETCH").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the default locations: `./citefetch.toml`,
/// then `<config-dir>/citefetch/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("citefetch.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("citefetch").join("config.toml"))
        .filter(|path| path.is_file())
}
