//! AOC HTTP Client Library
//!
//! Thin blocking transport for downloading Advent of Code puzzle inputs.
//!
//! # Features
//!
//! - Input URL construction for any year and day
//! - Session cookie attached as a sensitive header, temporary copies zeroized
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! Reading the response body is left to the caller: [`AocClient::open`] hands
//! back the response, which implements [`std::io::Read`].
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//! use std::io::Read;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let url = AocClient::input_url(&AocClient::default_base_url(), 2015, 1)?;
//!
//! let mut response = client.open(&url, "your_session_cookie_here")?;
//! let mut body = Vec::new();
//! response.read_to_end(&mut body)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL};
pub use error::AocError;
pub use reqwest::{IntoUrl, Url};
pub use reqwest::blocking::Response;
