//! Configuration resolution from CLI args and the environment

use crate::cli::Args;
use crate::error::CliError;
use crate::logging::LogLevel;
use aoc_input::Session;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variables checked for a session token, in order
pub const SESSION_ENV_VARS: [&str; 2] = ["aoc-session", "AOC_SESSION"];

/// Where the session token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// `--session` flag
    Flag,
    /// One of [`SESSION_ENV_VARS`]
    Env(&'static str),
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day
    pub day: u8,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Base URL for downloads
    pub endpoint: String,
    /// Session token (zeroized on drop) and its origin
    pub session: Option<(Session, SessionSource)>,
    /// Log verbosity
    pub log_level: LogLevel,
}

impl Config {
    /// Build config from CLI args, reading the session from the environment if needed
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let cache_dir = expand_tilde(&args.cache_dir);
        if cache_dir.as_os_str().is_empty() {
            return Err(CliError::Config("Cache directory must not be empty".to_string()));
        }

        let session = resolve_session(args.session, |name| std::env::var(name).ok());

        Ok(Config {
            year: args.year,
            day: args.day,
            cache_dir,
            endpoint: args.endpoint,
            session,
            log_level: LogLevel::from_flags(args.quiet, args.verbose),
        })
    }
}

/// Pick the session from the flag, then each environment variable in turn
///
/// Surrounding whitespace (e.g. a trailing newline from `export`) is stripped
/// and empty values are skipped.
fn resolve_session(
    flag: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<(Session, SessionSource)> {
    if let Some(session) = flag.and_then(trimmed_session) {
        return Some((session, SessionSource::Flag));
    }

    SESSION_ENV_VARS.iter().find_map(|&name| {
        lookup(name)
            .and_then(trimmed_session)
            .map(|session| (session, SessionSource::Env(name)))
    })
}

fn trimmed_session(raw: String) -> Option<Session> {
    let raw = Zeroizing::new(raw);
    Session::from_zeroizing(Zeroizing::new(raw.trim().to_string()))
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}
