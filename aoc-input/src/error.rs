//! Error types for input acquisition

use crate::buffer::BufferError;
use crate::key::PuzzleKey;
use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a call to the provider produced no input
#[derive(Error, Debug)]
pub enum InputError {
    /// Year before 2015 or day outside 1..=25
    #[error("Invalid puzzle key: year {year}, day {day}")]
    InvalidKey { year: u16, day: u8 },

    /// A network fetch was needed but no session token is available
    #[error("No session token available to fetch input for {key}")]
    MissingCredential { key: PuzzleKey },

    /// The cache file exists but could not be read
    #[error("Failed to read cached input {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport error, non-success status or truncated body
    #[error("Failed to fetch input for {key}: {source}")]
    FetchFailure {
        key: PuzzleKey,
        #[source]
        source: FetchError,
    },

    /// Growing the input buffer failed
    #[error("Failed to grow input buffer: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// Errors reported by an [`HttpFetcher`](crate::HttpFetcher)
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP transport failed
    #[error(transparent)]
    Transport(#[from] aoc_http_client::AocError),

    /// Reading the response body failed
    #[error("Failed to read response body: {0}")]
    Body(#[from] BufferError),

    /// Failure from any other fetcher implementation
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Cache write errors (non-fatal, only logged by the provider)
#[derive(Error, Debug)]
pub enum CacheWriteError {
    /// Cache directory creation failed
    #[error("Failed to create cache directory {}: {source}", .path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the temporary file failed
    #[error("Failed to write cache file: {0}")]
    Io(#[from] std::io::Error),

    /// Renaming the temporary file over the cache file failed
    #[error("Failed to persist cache file {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
