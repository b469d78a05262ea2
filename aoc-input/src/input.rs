//! Owned puzzle input

use std::str::Utf8Error;

/// Where an [`Input`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Read from an existing cache file
    Cache,
    /// Downloaded from the remote endpoint
    Remote,
}

/// Raw puzzle input with its exact length
///
/// Cache hits and downloads have the same shape; zero bytes are content, not
/// terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    bytes: Vec<u8>,
    source: InputSource,
}

impl Input {
    pub(crate) fn new(bytes: Vec<u8>, source: InputSource) -> Self {
        Self { bytes, source }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Borrow as text
    ///
    /// # Errors
    ///
    /// Fails if the input is not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Convert to text, replacing invalid UTF-8 sequences
    pub fn into_string(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl AsRef<[u8]> for Input {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
