//! Error types for record fetches.
//!
//! Every failure inside a single attempt (bad URL, transport failure, undecodable
//! body) is represented here so it can be logged, but the fetch operations only
//! ever hand [`Error::TimedOut`] back to the caller once the attempts run out.

use http::StatusCode;

/// The main error type for record fetches.
///
/// # Examples
///
/// ```no_run
/// use pokefetch::{Client, Config, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new(Config::new("http://localhost:8080/pokemon", "8080"))?;
///
/// match client.fetch_record().await {
///     Ok(response) => println!("Fetched {}", response.data.name),
///     Err(Error::TimedOut { attempts }) => {
///         eprintln!("Gave up after {} attempts", attempts);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection refused, DNS lookup failed,
    /// the per-request timeout elapsed, etc.).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured URL could not be turned into a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to deserialize the response body into the expected shape.
    ///
    /// The raw body is preserved so the payload can be inspected in logs.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The HTTP handle could not be built from the configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Every attempt failed.
    ///
    /// The error of the individual attempts is not carried along; they are
    /// reported through `tracing` as they happen.
    #[error("timed out waiting for response after {attempts} attempts")]
    TimedOut {
        /// The number of attempts made
        attempts: usize,
    },
}

impl Error {
    /// Returns `true` if this is the aggregate error reported once all
    /// attempts have failed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::TimedOut { .. })
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::DeserializationFailed { status, .. } => Some(*status),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// A specialized `Result` type for record fetches.
pub type Result<T> = std::result::Result<T, Error>;
