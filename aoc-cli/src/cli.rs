//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code input fetcher
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Print an Advent of Code puzzle input, downloading and caching it on first use",
    version
)]
pub struct Args {
    /// Puzzle year (2015 or later)
    #[arg(value_parser = clap::value_parser!(u16).range(2015..))]
    pub year: u16,

    /// Puzzle day (1-25)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Session token; overrides the `aoc-session` and `AOC_SESSION` environment variables
    #[arg(long)]
    pub session: Option<String>,

    /// Directory holding the `{year}-{day}.txt` cache files
    #[arg(long, default_value = ".")]
    pub cache_dir: PathBuf,

    /// Base URL inputs are downloaded from
    #[arg(long, default_value = aoc_http_client::DEFAULT_BASE_URL)]
    pub endpoint: String,

    /// Quiet mode - only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - log cache and request details
    #[arg(short, long)]
    pub verbose: bool,
}
