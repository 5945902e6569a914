//! Client configuration.

use std::time::Duration;

/// Per-request timeout applied to the HTTP handle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of attempts a fetch makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Pause between a failed attempt and the next one.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Connection settings for a [`Client`](crate::Client).
///
/// # Examples
///
/// ```
/// use pokefetch::Config;
/// use std::time::Duration;
///
/// let config = Config::builder()
///     .url("http://localhost:8080/pokemon")
///     .port("8080")
///     .retry_delay(Duration::from_millis(500))
///     .build();
///
/// assert_eq!(config.max_attempts, 3);
/// assert_eq!(config.timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The endpoint every fetch issues its GET against.
    pub url: String,

    /// The port the API listens on.
    ///
    /// Informational only: requests go to `url` as given.
    pub port: String,

    /// Timeout for a single HTTP request.
    pub timeout: Duration,

    /// Maximum number of attempts per fetch. Values below 1 are treated as 1.
    pub max_attempts: usize,

    /// Fixed pause between attempts.
    pub retry_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            port: String::new(),
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl Config {
    /// Creates a configuration for `url` with the default timeout and retry
    /// settings.
    pub fn new(url: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            port: port.into(),
            ..Default::default()
        }
    }

    /// Creates a new builder for configuring a client.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for `Config`.
#[derive(Default)]
pub struct ConfigBuilder {
    url: Option<String>,
    port: Option<String>,
    timeout: Option<Duration>,
    max_attempts: Option<usize>,
    retry_delay: Option<Duration>,
}

impl ConfigBuilder {
    /// Sets the endpoint URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the port.
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of attempts per fetch.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Sets the pause between attempts.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Builds the `Config`.
    pub fn build(self) -> Config {
        let default = Config::default();
        Config {
            url: self.url.unwrap_or(default.url),
            port: self.port.unwrap_or(default.port),
            timeout: self.timeout.unwrap_or(default.timeout),
            max_attempts: self.max_attempts.unwrap_or(default.max_attempts),
            retry_delay: self.retry_delay.unwrap_or(default.retry_delay),
        }
    }
}
