//! Cache-or-fetch input provider

use crate::buffer::BufferError;
use crate::cache::InputCache;
use crate::error::{FetchError, InputError};
use crate::fetcher::HttpFetcher;
use crate::input::{Input, InputSource};
use crate::key::PuzzleKey;
use crate::session::Session;
use aoc_http_client::{AocClient, AocError, IntoUrl, Url};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Returns puzzle inputs, reading the cache file when present and downloading
/// (then caching) otherwise
///
/// Cached files are never refreshed. Calls for the same key are serialized so
/// concurrent callers trigger at most one download; calls for different keys
/// do not block each other.
///
/// # Example
///
/// ```no_run
/// use aoc_input::{InputProvider, Session};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = InputProvider::builder()
///     .cache_dir("inputs")
///     .session(Session::new("your_session_cookie"))
///     .build()?;
///
/// let input = provider.get_input(2015, 1)?;
/// println!("{} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct InputProvider<F = AocClient> {
    cache: InputCache,
    endpoint: Url,
    session: Option<Session>,
    fetcher: F,
    locks: Mutex<HashMap<PuzzleKey, Arc<Mutex<()>>>>,
}

impl InputProvider<AocClient> {
    pub fn builder() -> InputProviderBuilder {
        InputProviderBuilder::new()
    }
}

impl<F: HttpFetcher> InputProvider<F> {
    /// Provider caching in the working directory and fetching from adventofcode.com
    pub fn new(fetcher: F, session: Option<Session>) -> Self {
        InputProviderBuilder::new().session(session).build_with(fetcher)
    }

    pub fn cache(&self) -> &InputCache {
        &self.cache
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the input for `year`/`day` using the session given at construction
    ///
    /// # Errors
    ///
    /// * `InputError::InvalidKey` - Year before 2015 or day outside 1..=25
    /// * `InputError::ReadFailure` - Cache file exists but cannot be read
    /// * `InputError::MissingCredential` - Cache miss and no session configured
    /// * `InputError::FetchFailure` - Download failed; nothing is cached
    /// * `InputError::AllocationFailure` - Input buffer could not grow
    pub fn get_input(&self, year: u16, day: u8) -> Result<Input, InputError> {
        self.acquire(year, day, self.session.as_ref())
            .inspect_err(|e| debug!(year, day, error = %e, "could not get input"))
    }

    /// Same as [`get_input`](Self::get_input) but authenticates with `session`
    pub fn get_input_with_session(
        &self,
        year: u16,
        day: u8,
        session: &Session,
    ) -> Result<Input, InputError> {
        self.acquire(year, day, Some(session))
            .inspect_err(|e| debug!(year, day, error = %e, "could not get input"))
    }

    fn acquire(
        &self,
        year: u16,
        day: u8,
        session: Option<&Session>,
    ) -> Result<Input, InputError> {
        let key = PuzzleKey::new(year, day)?;

        let lock = self.key_lock(key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(bytes) = self.cache.get(key)? {
            debug!(%key, bytes = bytes.len(), "cache hit");
            return Ok(Input::new(bytes, InputSource::Cache));
        }

        let session = session.ok_or(InputError::MissingCredential { key })?;
        let bytes = self.download(key, session)?;

        // A failed cache write must not lose a successful download
        match self.cache.put(key, &bytes) {
            Ok(path) => info!(%key, path = %path.display(), "cached input"),
            Err(e) => warn!(%key, error = %e, "failed to cache input"),
        }

        Ok(Input::new(bytes, InputSource::Remote))
    }

    fn download(&self, key: PuzzleKey, session: &Session) -> Result<Vec<u8>, InputError> {
        let url = AocClient::input_url(&self.endpoint, key.year(), key.day()).map_err(|e| {
            InputError::FetchFailure {
                key,
                source: e.into(),
            }
        })?;

        info!(%key, %url, "fetching input");
        let bytes = self.fetcher.fetch(&url, session).map_err(|e| match e {
            FetchError::Body(BufferError::Allocation(e)) => InputError::AllocationFailure(e),
            source => InputError::FetchFailure { key, source },
        })?;
        debug!(%key, bytes = bytes.len(), "fetched input");

        Ok(bytes)
    }

    fn key_lock(&self, key: PuzzleKey) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(key).or_default())
    }
}

/// Builder for an [`InputProvider`]
#[derive(Debug, Clone)]
pub struct InputProviderBuilder {
    cache_dir: PathBuf,
    endpoint: Url,
    session: Option<Session>,
}

impl InputProviderBuilder {
    /// Defaults: cache in the working directory, fetch from adventofcode.com, no session
    pub fn new() -> Self {
        Self {
            cache_dir: PathBuf::from("."),
            endpoint: AocClient::default_base_url(),
            session: None,
        }
    }

    /// Directory holding the `{year}-{day:02}.txt` files
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Session used by [`InputProvider::get_input`]
    pub fn session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    /// Set a custom endpoint, e.g. a mock server
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn endpoint(mut self, url: impl IntoUrl) -> Result<Self, AocError> {
        self.endpoint = url.into_url()?;
        Ok(self)
    }

    /// Build with the default [`AocClient`] transport
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<InputProvider<AocClient>, AocError> {
        Ok(self.build_with(AocClient::new()?))
    }

    /// Build with a custom transport
    pub fn build_with<F: HttpFetcher>(self, fetcher: F) -> InputProvider<F> {
        InputProvider {
            cache: InputCache::new(self.cache_dir),
            endpoint: self.endpoint,
            session: self.session,
            fetcher,
            locks: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InputProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
