//! API server configuration, loadable from TOML or environment.

use std::time::Duration;

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the JSON event catalog.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Extraction model settings.
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// Which extraction backend to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OracleProvider {
    /// OpenAI-compatible chat completions endpoint.
    #[default]
    Openai,
    /// AWS Bedrock Converse API.
    Bedrock,
}

impl OracleProvider {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Some(Self::Openai),
            "bedrock" => Some(Self::Bedrock),
            _ => None,
        }
    }
}

/// Extraction model settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    #[serde(default)]
    pub provider: OracleProvider,
    /// API key for the OpenAI-compatible endpoint. Empty means unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Chat model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the OpenAI-compatible API (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bedrock model ID (e.g., "us.amazon.nova-lite-v1:0").
    #[serde(default = "default_bedrock_model_id")]
    pub bedrock_model_id: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_path() -> String {
    "events.json".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_bedrock_model_id() -> String {
    "us.amazon.nova-lite-v1:0".to_string()
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: OracleProvider::default(),
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            bedrock_model_id: default_bedrock_model_id(),
        }
    }
}

impl OracleConfig {
    /// The API key with whitespace trimmed, if one is set.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            oracle: OracleConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from the TOML file named by `EM_CONFIG` if set, otherwise from
    /// the environment. The API key is always taken from `OPENAI_API_KEY`
    /// when the file does not carry one.
    pub fn load() -> anyhow::Result<Self> {
        let Ok(path) = std::env::var("EM_CONFIG") else {
            return Ok(Self::from_env());
        };
        let mut config = Self::from_file(&path)?;
        if config.oracle.api_key().is_none() {
            config.oracle.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(config)
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT").and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        if let Some(path) = get("EVENTS_CATALOG_PATH") {
            config.catalog_path = path;
        }

        let oracle = &mut config.oracle;
        if let Some(provider) = get("ORACLE_PROVIDER").and_then(|p| OracleProvider::parse(&p)) {
            oracle.provider = provider;
        }
        oracle.api_key = get("OPENAI_API_KEY");
        if let Some(model) = get("OPENAI_MODEL") {
            oracle.model = model;
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            oracle.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = get("ORACLE_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            oracle.timeout_secs = secs;
        }
        if let Some(model_id) = get("BEDROCK_MODEL_ID") {
            oracle.bedrock_model_id = model_id;
        }
        config
    }
}
