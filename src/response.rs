//! Decoded payload plus the details of the attempt that produced it.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successfully decoded fetch.
///
/// The status code is recorded but never checked: a non-2xx response whose
/// body decodes into `T` is still a `Response`.
///
/// # Examples
///
/// ```no_run
/// use pokefetch::{Client, Config};
///
/// # async fn example() -> Result<(), pokefetch::Error> {
/// let client = Client::new(Config::new("http://localhost:8080/pokemon", "8080"))?;
///
/// let response = client.fetch_record().await?;
///
/// println!("Name: {}", response.data.name);
/// println!("Took {:?} over {} attempts", response.latency, response.attempts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded payload.
    pub data: T,

    /// The raw response body as received.
    pub raw_body: String,

    /// The HTTP status code of the successful attempt.
    pub status: StatusCode,

    /// The response headers of the successful attempt.
    pub headers: HeaderMap,

    /// Time from the first attempt until the body was decoded, pauses
    /// between attempts included.
    pub latency: Duration,

    /// Number of attempts it took; `1` when the first one succeeded.
    pub attempts: usize,
}

impl<T> Response<T> {
    /// Assembles a response from a decoded attempt.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
        attempts: usize,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
            attempts,
        }
    }

    /// Returns `true` if more than one attempt was needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pokefetch::{Record, Response};
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     Record::nil(),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_secs(4),
    ///     3,
    /// );
    ///
    /// assert!(response.was_retried());
    /// ```
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a header value by name, if present and valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pokefetch::{Record, Response};
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     Record::new("1", "Pikachu", "100"),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(12),
    ///     1,
    /// );
    ///
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// assert_eq!(response.header("etag"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use http::HeaderValue;

    fn sample(attempts: usize) -> Response<Record> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        Response::new(
            Record::new("1", "Pikachu", "100"),
            r#"{"id":"1","name":"Pikachu","score":"100"}"#.to_string(),
            StatusCode::OK,
            headers,
            Duration::from_millis(5),
            attempts,
        )
    }

    #[test]
    fn test_was_retried() {
        assert!(!sample(1).was_retried());
        assert!(sample(3).was_retried());
    }

    #[test]
    fn test_header_lookup() {
        let response = sample(1);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_deref_to_record() {
        let response = sample(2);
        assert_eq!(response.name, "Pikachu");
        assert_eq!(response.score, "100");
    }
}
