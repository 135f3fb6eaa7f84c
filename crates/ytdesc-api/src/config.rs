//! API configuration.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use ytdesc_youtube::{YoutubeClientConfig, DEFAULT_BASE_URL};

/// Configuration errors. These are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0} in environment")]
    MissingVar(&'static str),
}

/// API server configuration, read once at startup.
#[derive(Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// Explicit log format (`json` or `pretty`); unset follows the environment
    pub log_format: Option<String>,
    /// Expose Prometheus metrics at /metrics
    pub metrics_enabled: bool,
    /// YouTube Data API client settings
    pub youtube: YoutubeClientConfig,
    /// Key for the text-extraction service used to label links with companies
    pub openai_api_key: Option<String>,
}

impl ApiConfig {
    /// Defaults for everything but the required YouTube API key.
    pub fn new(youtube_api_key: impl Into<String>) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            max_body_size: 64 * 1024,
            environment: "development".to_string(),
            log_format: None,
            metrics_enabled: true,
            youtube: YoutubeClientConfig::new(youtube_api_key),
            openai_api_key: None,
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let youtube_api_key =
            non_empty("YOUTUBE_API_KEY").ok_or(ConfigError::MissingVar("YOUTUBE_API_KEY"))?;
        let defaults = Self::new(youtube_api_key);

        Ok(Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port: lookup("API_PORT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            request_timeout: parsed("REQUEST_TIMEOUT")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_body_size: parsed("MAX_BODY_SIZE")
                .map(|n| n as usize)
                .unwrap_or(defaults.max_body_size),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_format: non_empty("LOG_FORMAT"),
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
            youtube: YoutubeClientConfig {
                base_url: non_empty("YOUTUBE_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: parsed("YOUTUBE_API_TIMEOUT")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.youtube.timeout),
                ..defaults.youtube
            },
            openai_api_key: non_empty("OPENAI_API_KEY"),
        })
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }

    /// Whether logs are emitted as JSON. Production defaults to JSON unless
    /// `LOG_FORMAT` says otherwise.
    pub fn json_logs(&self) -> bool {
        match self.log_format.as_deref() {
            Some(format) => format.trim().eq_ignore_ascii_case("json"),
            None => self.is_production(),
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout", &self.request_timeout)
            .field("max_body_size", &self.max_body_size)
            .field("environment", &self.environment)
            .field("log_format", &self.log_format)
            .field("metrics_enabled", &self.metrics_enabled)
            .field("youtube", &self.youtube)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
