//! # Pokefetch - typed record fetches with a fixed retry policy
//!
//! Pokefetch fetches a single record or a list of records from one JSON
//! endpoint over HTTP GET. Each fetch is retried a fixed number of times with a
//! fixed pause in between, and the decoded payload comes back alongside the
//! raw body, status, latency and attempt count.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pokefetch::{Client, Config};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pokefetch::Error> {
//!     let config = Config::builder()
//!         .url("http://localhost:8080/pokemon")
//!         .port("8080")
//!         .timeout(Duration::from_secs(10))
//!         .max_attempts(3)
//!         .retry_delay(Duration::from_secs(2))
//!         .build();
//!
//!     let client = Client::new(config)?;
//!
//!     let record = client.fetch_record().await?;
//!     println!("{} ({}) scored {}", record.name, record.id, record.score);
//!     println!("Request took {:?}", record.latency);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure handling
//!
//! A request that cannot be built, a transport failure and a body that does
//! not decode all count as a failed attempt. The HTTP status is not checked.
//! Once the attempts run out the fetch returns [`Error::TimedOut`]:
//!
//! ```no_run
//! use pokefetch::{Client, Config, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new(Config::new("http://localhost:8080/pokemon", "8080"))?;
//! match client.fetch_record_list().await {
//!     Ok(response) => println!("Got {} records", response.data.len()),
//!     Err(Error::TimedOut { attempts }) => eprintln!("No luck after {} attempts", attempts),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Callers that still expect the placeholder values can use
//! [`Client::fetch_record_or_nil`] and [`Client::fetch_record_list_or_empty`].

mod client;
mod config;
mod error;
mod record;
mod response;
pub mod retry;

pub use client::Client;
pub use config::{
    Config, ConfigBuilder, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
};
pub use error::{Error, Result};
pub use record::{Record, RecordList};
pub use response::Response;
pub use retry::{retry, RetryPolicy};
