//! Transport capability used on cache misses

use crate::buffer;
use crate::error::FetchError;
use crate::session::Session;
use aoc_http_client::{AocClient, Url};
use std::sync::Arc;

/// Something that can download a URL with a session cookie
///
/// The provider only talks to the network through this trait, so tests and
/// other transports can stand in for [`AocClient`].
pub trait HttpFetcher {
    /// Issue one GET for `url` authenticated with `session` and return the full body
    fn fetch(&self, url: &Url, session: &Session) -> Result<Vec<u8>, FetchError>;
}

impl HttpFetcher for AocClient {
    fn fetch(&self, url: &Url, session: &Session) -> Result<Vec<u8>, FetchError> {
        let response = self.open(url, session.expose())?;
        Ok(buffer::read_to_end(response)?)
    }
}

impl<T: HttpFetcher + ?Sized> HttpFetcher for &T {
    fn fetch(&self, url: &Url, session: &Session) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url, session)
    }
}

impl<T: HttpFetcher + ?Sized> HttpFetcher for Box<T> {
    fn fetch(&self, url: &Url, session: &Session) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url, session)
    }
}

impl<T: HttpFetcher + ?Sized> HttpFetcher for Arc<T> {
    fn fetch(&self, url: &Url, session: &Session) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url, session)
    }
}
