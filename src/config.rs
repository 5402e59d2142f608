//! Runtime configuration.
//!
//! Everything is resolved from environment variables once at startup. Use the
//! builder setters to override values in tests.
//!
//! # Example
//!
//! ```ignore
//! use serp_studio::config::StudioConfig;
//!
//! let config = StudioConfig::from_env()?
//!     .with_endpoint("http://localhost:9000/api/rewrite");
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{StudioError, StudioResult};
use crate::metrics::DisplayMode;

pub const ENV_ENDPOINT: &str = "SERP_STUDIO_ENDPOINT";
pub const ENV_HOME: &str = "SERP_STUDIO_HOME";
pub const ENV_DOWNLOADS: &str = "SERP_STUDIO_DOWNLOADS";
pub const ENV_MODE: &str = "SERP_STUDIO_MODE";
pub const ENV_BIND: &str = "SERP_STUDIO_BIND";
pub const ENV_UPSTREAM: &str = "SERP_STUDIO_UPSTREAM";
pub const ENV_MODEL: &str = "SERP_STUDIO_MODEL";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/rewrite";
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
pub const DEFAULT_UPSTREAM: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Log file name inside the state directory.
pub const LOG_FILE: &str = "serp-studio.log";

/// Settings for the `serve` rewrite proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxySettings {
    /// Address the proxy listens on
    pub bind: SocketAddr,
    /// Chat-completions URL requests are forwarded to
    pub upstream: String,
    pub model: String,
    /// Bearer token for the upstream; requests go out unauthenticated without it
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8787)),
            upstream: DEFAULT_UPSTREAM.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: 150,
            temperature: 0.7,
        }
    }
}

impl ProxySettings {
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_upstream(mut self, upstream: impl Into<String>) -> Self {
        self.upstream = upstream.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Configuration for the studio and its front-ends.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Rewrite backend URL
    pub endpoint: String,
    /// Directory holding `state.json` and the log file
    pub state_dir: PathBuf,
    /// Where exports are written
    pub downloads_dir: PathBuf,
    /// Initial display mode
    pub mode: DisplayMode,
    pub proxy: ProxySettings,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state_dir: default_state_dir(),
            downloads_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            mode: DisplayMode::Desktop,
            proxy: ProxySettings::default(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_dir = dir.into();
        self
    }

    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = dir.into();
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_proxy(mut self, proxy: ProxySettings) -> Self {
        self.proxy = proxy;
        self
    }

    /// Path of the interactive front-end's log file.
    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILE)
    }

    /// Resolve from the process environment.
    pub fn from_env() -> StudioResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> StudioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        validate_url(ENV_ENDPOINT, &config.endpoint)?;

        if let Some(home) = get(ENV_HOME) {
            config.state_dir = PathBuf::from(home);
        }
        if let Some(downloads) = get(ENV_DOWNLOADS) {
            config.downloads_dir = PathBuf::from(downloads);
        }
        if let Some(mode) = get(ENV_MODE) {
            config.mode = mode
                .parse()
                .map_err(|e| StudioError::Config(format!("{}: {}", ENV_MODE, e)))?;
        }

        if let Some(bind) = get(ENV_BIND) {
            config.proxy.bind = bind.parse().map_err(|e| {
                StudioError::Config(format!("{}: invalid address '{}': {}", ENV_BIND, bind, e))
            })?;
        }
        if let Some(upstream) = get(ENV_UPSTREAM) {
            config.proxy.upstream = upstream;
        }
        validate_url(ENV_UPSTREAM, &config.proxy.upstream)?;
        if let Some(model) = get(ENV_MODEL) {
            config.proxy.model = model;
        }
        config.proxy.api_key = get(ENV_API_KEY);

        Ok(config)
    }
}

fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".serp-studio"))
        .unwrap_or_else(|| PathBuf::from(".serp-studio"))
}

fn validate_url(var: &str, url: &str) -> StudioResult<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(StudioError::Config(format!(
            "{}: expected an http(s) URL, got '{}'",
            var, url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StudioConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.mode, DisplayMode::Desktop);
        assert_eq!(config.proxy.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.proxy.upstream, DEFAULT_UPSTREAM);
        assert_eq!(config.proxy.model, DEFAULT_MODEL);
        assert_eq!(config.proxy.max_tokens, 150);
        assert!(config.proxy.api_key.is_none());
        assert!(config.state_dir.ends_with(".serp-studio"));
    }

    #[test]
    fn test_overrides() {
        let config = StudioConfig::from_lookup(lookup(&[
            (ENV_ENDPOINT, "https://rewrite.example/api/rewrite"),
            (ENV_HOME, "/tmp/serp"),
            (ENV_DOWNLOADS, "/tmp/out"),
            (ENV_MODE, "mobile"),
            (ENV_BIND, "0.0.0.0:9000"),
            (ENV_MODEL, "gpt-4o-mini"),
            (ENV_API_KEY, "sk-test"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "https://rewrite.example/api/rewrite");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/serp"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/serp").join(LOG_FILE));
        assert_eq!(config.downloads_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.mode, DisplayMode::Mobile);
        assert_eq!(config.proxy.bind.port(), 9000);
        assert_eq!(config.proxy.model, "gpt-4o-mini");
        assert_eq!(config.proxy.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config =
            StudioConfig::from_lookup(lookup(&[(ENV_ENDPOINT, "  "), (ENV_API_KEY, "")])).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.proxy.api_key.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = StudioConfig::from_lookup(lookup(&[(ENV_MODE, "tablet")])).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        assert!(StudioConfig::from_lookup(lookup(&[(ENV_BIND, "localhost")])).is_err());
        assert!(StudioConfig::from_lookup(lookup(&[(ENV_ENDPOINT, "ftp://x")])).is_err());
        assert!(StudioConfig::from_lookup(lookup(&[(ENV_UPSTREAM, "api.openai.com")])).is_err());
    }

    #[test]
    fn test_builder() {
        let config = StudioConfig::new()
            .with_endpoint("http://localhost:1/api/rewrite")
            .with_state_dir("/state")
            .with_downloads_dir("/downloads")
            .with_mode(DisplayMode::Mobile)
            .with_proxy(ProxySettings::default().with_model("m").with_api_key("k"));

        assert_eq!(config.endpoint, "http://localhost:1/api/rewrite");
        assert_eq!(config.downloads_dir, PathBuf::from("/downloads"));
        assert_eq!(config.proxy.model, "m");
        assert_eq!(config.proxy.api_key.as_deref(), Some("k"));
    }
}
