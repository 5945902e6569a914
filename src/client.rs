//! HTTP client that fetches records from the configured endpoint.
//!
//! Every fetch is a GET against [`Config::url`], decoded from JSON and wrapped
//! in the fixed retry loop from [`crate::retry`].

use crate::{
    record::{Record, RecordList},
    retry::{retry, RetryPolicy},
    Config, Error, Response, Result,
};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// A client for the record endpoint.
///
/// Built once from a [`Config`] and reused for every fetch. Cloning is cheap
/// and clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use pokefetch::{Client, Config};
///
/// # async fn example() -> Result<(), pokefetch::Error> {
/// let client = Client::new(Config::new("http://localhost:8080/pokemon", "8080"))?;
///
/// let record = client.fetch_record().await?;
/// println!("{} scored {}", record.name, record.score);
///
/// let list = client.fetch_record_list().await?;
/// for record in &list.data {
///     println!("{}: {}", record.id, record.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    config: Config,
    retry_policy: RetryPolicy,
}

/// The outcome of one successful attempt, before latency and attempt count
/// are known.
struct Decoded<T> {
    data: T,
    raw_body: String,
    status: StatusCode,
    headers: HeaderMap,
}

impl Client {
    /// Creates a client with the configured per-request timeout.
    ///
    /// The URL is not validated here; a malformed URL fails each attempt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the HTTP handle cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        let retry_policy = RetryPolicy::from(&config);

        tracing::debug!(
            url = %config.url,
            timeout_ms = config.timeout.as_millis(),
            max_attempts = retry_policy.max_attempts(),
            retry_delay_ms = retry_policy.delay().as_millis(),
            "Created client"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                config,
                retry_policy,
            }),
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Fetches a single record.
    ///
    /// Expects a body of the form `{"id": "...", "name": "...", "score": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimedOut`] once every attempt has failed.
    pub async fn fetch_record(&self) -> Result<Response<Record>> {
        self.fetch().await
    }

    /// Fetches a list of records.
    ///
    /// Expects a body of the form `{"pokemonList": [...]}`; order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimedOut`] once every attempt has failed.
    pub async fn fetch_record_list(&self) -> Result<Response<RecordList>> {
        self.fetch().await
    }

    /// Like [`fetch_record`](Self::fetch_record), but returns [`Record::nil`]
    /// alongside the error instead of a `Result`.
    pub async fn fetch_record_or_nil(&self) -> (Record, Option<Error>) {
        match self.fetch_record().await {
            Ok(response) => (response.data, None),
            Err(e) => (Record::nil(), Some(e)),
        }
    }

    /// Like [`fetch_record_list`](Self::fetch_record_list), but returns an
    /// empty list alongside the error instead of a `Result`.
    pub async fn fetch_record_list_or_empty(&self) -> (RecordList, Option<Error>) {
        match self.fetch_record_list().await {
            Ok(response) => (response.data, None),
            Err(e) => (RecordList::default(), Some(e)),
        }
    }

    /// GETs the configured URL and decodes the body as `T`, retrying any
    /// failed attempt.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pokefetch::{Client, Config};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Names {
    ///     #[serde(rename = "pokemonList")]
    ///     list: Vec<Name>,
    /// }
    ///
    /// #[derive(Deserialize)]
    /// struct Name {
    ///     name: String,
    /// }
    ///
    /// # async fn example() -> Result<(), pokefetch::Error> {
    /// let client = Client::new(Config::new("http://localhost:8080/pokemon", "8080"))?;
    /// let names = client.fetch::<Names>().await?;
    /// println!("{} names", names.list.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch<T>(&self) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let start_time = Instant::now();

        let (decoded, attempts) =
            retry(&self.inner.retry_policy, |attempt| self.attempt::<T>(attempt)).await?;

        Ok(Response::new(
            decoded.data,
            decoded.raw_body,
            decoded.status,
            decoded.headers,
            start_time.elapsed(),
            attempts,
        ))
    }

    /// Executes a single request and decodes its body.
    async fn attempt<T>(&self, attempt: usize) -> Result<Decoded<T>>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(&self.inner.config.url)?;

        tracing::debug!(url = %url, attempt = attempt, "Executing HTTP request");

        let started = Instant::now();
        let response = self.inner.http_client.get(url).send().await?;
        let status = response.status();
        let headers = response.headers().clone();

        // Always drain the body, even when it will not decode.
        let raw_body = response.text().await?;

        tracing::info!(
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis(),
            attempt = attempt,
            "Received HTTP response"
        );

        let data = serde_json::from_str::<T>(&raw_body).map_err(|e| {
            tracing::debug!(
                error = %e,
                raw_response = %raw_body,
                "Failed to deserialize response"
            );
            Error::DeserializationFailed {
                raw_response: raw_body.clone(),
                serde_error: e.to_string(),
                status,
            }
        })?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                "Non-success status with a decodable body, accepting it"
            );
        }

        Ok(Decoded {
            data,
            raw_body,
            status,
            headers,
        })
    }
}
