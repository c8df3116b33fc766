use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
}

/// Network and retry defaults shared by the endpoint and the query layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Total upstream request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Retries after the first failed attempt for transport errors (default: 1).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base backoff in milliseconds for retry (default: 100).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
}

/// Local search endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the search endpoint (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Base URL the client-side gateway calls (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Upstream movie database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// Upstream host, e.g. "https://omdbapi.com".
    #[serde(default = "default_omdb_url")]
    pub base_url: String,
    /// Inline API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_backoff_base_ms() -> u64 {
    100
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_omdb_url() -> String {
    "https://omdbapi.com".to_string()
}

fn default_api_key_env() -> String {
    "OMDB_API_KEY".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            base_url: default_base_url(),
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_omdb_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}
