use num_format::Locale;
use serde::{Deserialize, Serialize};

use crate::analytics::{ChartOptions, DEFAULT_CHART_LIMIT};
use crate::dashboard::DEFAULT_TRENDING_LIMIT;
use crate::tmdb::{MovieSource, RelayClient, TmdbClient, DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(alias = "apikey", rename = "apikey")]
    #[serde(default)]
    pub api_key: String,
    #[serde(alias = "baseurl", rename = "baseurl")]
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(alias = "imagebaseurl", rename = "imagebaseurl")]
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(alias = "trendinglimit", rename = "trendinglimit")]
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,
    #[serde(alias = "chartlimit", rename = "chartlimit")]
    #[serde(default = "default_chart_limit")]
    pub chart_limit: usize,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Fetch through this relay instead of calling TMDB directly.
    #[serde(alias = "relayurl", rename = "relayurl")]
    #[serde(default)]
    pub relay_url: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trending_limit: default_trending_limit(),
            chart_limit: default_chart_limit(),
            locale: default_locale(),
            relay_url: None,
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_trending_limit() -> usize {
    DEFAULT_TRENDING_LIMIT
}

fn default_chart_limit() -> usize {
    DEFAULT_CHART_LIMIT
}

fn default_locale() -> String {
    "en".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// The fetcher the dashboard should use: the relay when one is
    /// configured, TMDB itself otherwise.
    pub fn movie_source(&self) -> Result<Box<dyn MovieSource>, ConfigError> {
        if let Some(ref relay_url) = self.dashboard.relay_url {
            return Ok(Box::new(RelayClient::new(relay_url)));
        }
        if self.tmdb.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Box::new(TmdbClient::with_base_url(
            &self.tmdb.api_key,
            &self.tmdb.base_url,
        )))
    }
}

impl DashboardConfig {
    pub fn chart_options(&self) -> Result<ChartOptions, ConfigError> {
        let locale = Locale::from_name(&self.locale)
            .map_err(|_| ConfigError::InvalidLocale(self.locale.clone()))?;
        Ok(ChartOptions {
            limit: self.chart_limit,
            locale,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Unknown locale: {0}")]
    InvalidLocale(String),
    #[error("No TMDB API key configured")]
    MissingApiKey,
}
