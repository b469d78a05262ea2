//! Basic usage example for the AOC HTTP client
//!
//! Downloads one puzzle input and prints its size.
//!
//! Note: This example requires a valid AOC session cookie to run.
//! You can get your session cookie from your browser's cookies after logging in to adventofcode.com

use aoc_http_client::AocClient;
use std::io::Read;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION")
        .expect("AOC_SESSION environment variable not set");

    let client = AocClient::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;

    let url = AocClient::input_url(&AocClient::default_base_url(), 2015, 1)?;
    println!("Fetching {}", url);

    let mut body = Vec::new();
    client.open(&url, &session)?.read_to_end(&mut body)?;
    println!("✓ Input fetched ({} bytes)", body.len());

    Ok(())
}
