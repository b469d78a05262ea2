//! Session credential

use std::fmt;
use zeroize::Zeroizing;

/// Advent of Code session cookie value (without the `session=` prefix)
///
/// Zeroized on drop. `Debug` never prints the token.
#[derive(Clone)]
pub struct Session(Zeroizing<String>);

impl Session {
    /// Wrap a token, treating an empty or whitespace-only value as absent
    pub fn new(token: impl Into<String>) -> Option<Self> {
        Self::from_zeroizing(Zeroizing::new(token.into()))
    }

    /// Take over an already zeroizing token without copying it
    pub fn from_zeroizing(token: Zeroizing<String>) -> Option<Self> {
        if token.trim().is_empty() {
            return None;
        }
        Some(Self(token))
    }

    /// The token exactly as given
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}
