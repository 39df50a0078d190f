use crate::constants;
use crate::error::{MapError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoder: GeocoderConfig,
    pub layers: LayersConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Minimum spacing between any two provider calls.
    pub delay_ms: u64,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayersConfig {
    pub countries_limit: usize,
    pub locations_limit: usize,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_GEOCODER_URL.to_string(),
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
            delay_ms: constants::DEFAULT_GEOCODE_DELAY_MS,
            timeout_seconds: constants::DEFAULT_GEOCODE_TIMEOUT_SECONDS,
        }
    }
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            countries_limit: constants::COUNTRIES_LIMIT,
            locations_limit: constants::LOCATIONS_LIMIT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoder: GeocoderConfig::default(),
            layers: LayersConfig::default(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        if !Path::new(config_path).exists() {
            return Ok(Config::default());
        }
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            MapError::Config(format!("Failed to read config file '{}': {}", config_path, e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
