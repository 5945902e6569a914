//! Demo fetching a single record and a record list.
//!
//! Point it at any endpoint serving the record JSON shapes:
//!
//! ```text
//! cargo run --example fetch_records -- http://localhost:8080/pokemon http://localhost:8080/pokemon/list
//! ```

use pokefetch::{Client, Config, Error};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("pokefetch=debug,fetch_records=info")
        .init();

    let mut args = std::env::args().skip(1);
    let record_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/pokemon".to_string());
    let list_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/pokemon/list".to_string());

    println!("=== Single Record ===");
    let client = Client::new(
        Config::builder()
            .url(&record_url)
            .port("8080")
            .retry_delay(Duration::from_millis(500))
            .build(),
    )?;

    match client.fetch_record().await {
        Ok(response) => {
            println!("Record: {:?}", response.data);
            println!("Status: {}", response.status);
            println!("Attempts: {}", response.attempts);
            println!("Latency: {:?}", response.latency);
        }
        Err(e) => println!("Failed: {}", e),
    }
    println!();

    println!("=== Record List ===");
    let client = Client::new(Config::new(&list_url, "8080"))?;

    let (list, error) = client.fetch_record_list_or_empty().await;
    if let Some(e) = error {
        println!("Failed ({}), falling back to an empty list", e);
    }
    for record in &list {
        println!("{:>4}  {:<12} {}", record.id, record.name, record.score);
    }
    println!("{} records", list.len());

    Ok(())
}
