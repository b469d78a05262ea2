//! Logging init: structured logs to stderr so stdout carries only the input

use tracing_subscriber::EnvFilter;

/// Default verbosity when `RUST_LOG` is unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl LogLevel {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => LogLevel::Quiet,
            (false, true) => LogLevel::Verbose,
            (false, false) => LogLevel::Normal,
        }
    }

    /// `EnvFilter` directive for this level
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Quiet => "warn",
            LogLevel::Normal => "warn,aoc=info,aoc_input=info",
            LogLevel::Verbose => "info,aoc=debug,aoc_input=debug,aoc_http_client=debug",
        }
    }
}

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LogLevel) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
