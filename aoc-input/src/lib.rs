//! Advent of Code Input Provider
//!
//! Returns a puzzle's raw input for a `(year, day)` pair. A file named
//! `{year}-{day:02}.txt` in the cache directory is authoritative when it
//! exists; otherwise the input is downloaded with the caller's session cookie
//! and written to that file for next time.
//!
//! # Overview
//!
//! - [`InputProvider`]: the cache-or-fetch entry point
//! - [`HttpFetcher`]: transport capability, implemented for
//!   [`aoc_http_client::AocClient`]
//! - [`InputCache`]: `{year}-{day:02}.txt` files with atomic writes
//! - [`buffer`]: grow-by-doubling reader shared by both paths
//!
//! # Example
//!
//! ```no_run
//! use aoc_input::{InputProvider, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let session = std::env::var("AOC_SESSION").ok().and_then(Session::new);
//! let provider = InputProvider::builder().session(session).build()?;
//!
//! let input = provider.get_input(2015, 2)?;
//! for line in input.as_str()?.lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod buffer;
mod cache;
mod error;
mod fetcher;
mod input;
mod key;
mod provider;
mod session;

pub use cache::InputCache;
pub use error::{CacheWriteError, FetchError, InputError};
pub use fetcher::HttpFetcher;
pub use input::{Input, InputSource};
pub use key::{FIRST_YEAR, LAST_DAY, PuzzleKey};
pub use provider::{InputProvider, InputProviderBuilder};
pub use session::Session;
