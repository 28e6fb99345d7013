//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VELOCE_HOST` - Bind address (default: 127.0.0.1)
//! - `VELOCE_PORT` - Listen port (default: 4000)
//! - `VELOCE_DATA_DIR` - Directory for collection files (default: data)
//! - `VELOCE_SIMULATED_LATENCY_MS` - Artificial per-request delay, either a
//!   single value (`500`) or a range (`300-700`); unset disables the delay
//! - `SMTP_HOST` / `SMTP_PORT` / `SMTP_USERNAME` / `SMTP_PASSWORD` /
//!   `EMAIL_FROM_ADDRESS` - SMTP delivery; must be set together. When absent
//!   the server logs verification codes instead of emailing them
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the collection files
    pub data_dir: PathBuf,
    /// Artificial per-request delay, for demo parity with the mock backend
    pub simulated_latency: Option<LatencyConfig>,
    /// SMTP delivery configuration; `None` means log-only email
    pub email: Option<EmailConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry tracing sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Uniform random delay bounds, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyConfig {
    /// Parse `"500"` or `"300-700"`.
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |detail: &str| {
            ConfigError::InvalidEnvVar(
                "VELOCE_SIMULATED_LATENCY_MS".to_owned(),
                detail.to_owned(),
            )
        };

        let (min_ms, max_ms) = match raw.split_once('-') {
            Some((min, max)) => (
                min.trim()
                    .parse()
                    .map_err(|_| invalid("expected a number or min-max range"))?,
                max.trim()
                    .parse()
                    .map_err(|_| invalid("expected a number or min-max range"))?,
            ),
            None => {
                let ms = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected a number or min-max range"))?;
                (ms, ms)
            }
        };

        if min_ms > max_ms {
            return Err(invalid("range minimum exceeds maximum"));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// The delay bounds as an inclusive range.
    #[must_use]
    pub const fn range(&self) -> RangeInclusive<u64> {
        self.min_ms..=self.max_ms
    }
}

/// Email (SMTP) configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP authentication username
    pub smtp_username: String,
    /// SMTP authentication password
    pub smtp_password: SecretString,
    /// Email sender address (From header)
    pub from_address: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .finish()
    }
}

impl EmailConfig {
    /// Load SMTP configuration, if present.
    ///
    /// Returns `None` when no SMTP variables are set (the server then logs
    /// codes instead of sending them).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if only some of the SMTP variables are set.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let host = get_optional_env("SMTP_HOST");
        let port = get_optional_env("SMTP_PORT");
        let username = get_optional_env("SMTP_USERNAME");
        let password = get_optional_env("SMTP_PASSWORD");
        let from_address = get_optional_env("EMAIL_FROM_ADDRESS");

        match (host, port, username, password, from_address) {
            (Some(host), Some(port), Some(username), Some(password), Some(from_address)) => {
                let port = port.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "SMTP_PORT".to_owned(),
                        "expected a port number".to_owned(),
                    )
                })?;
                Ok(Some(Self {
                    smtp_host: host,
                    smtp_port: port,
                    smtp_username: username,
                    smtp_password: SecretString::from(password),
                    from_address,
                }))
            }
            (None, None, None, None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "SMTP_*".to_owned(),
                "SMTP_HOST, SMTP_PORT, SMTP_USERNAME, SMTP_PASSWORD and EMAIL_FROM_ADDRESS must be set together"
                    .to_owned(),
            )),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable, or
    /// the SMTP group is only partially set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VELOCE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VELOCE_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("VELOCE_PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VELOCE_PORT".to_owned(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("VELOCE_DATA_DIR", "data"));

        let simulated_latency = get_optional_env("VELOCE_SIMULATED_LATENCY_MS")
            .map(|raw| LatencyConfig::parse(&raw))
            .transpose()?;

        let email = EmailConfig::from_env()?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.1);

        Ok(Self {
            host,
            port,
            data_dir,
            simulated_latency,
            email,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// The socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable, or a default if unset.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
