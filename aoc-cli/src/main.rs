//! AOC CLI - prints a puzzle input, fetching and caching it on first use

mod cli;
mod config;
mod error;
mod logging;
mod output;

use aoc_input::{Input, InputProvider};
use clap::Parser;
use cli::Args;
use config::{Config, SessionSource};
use tracing::{debug, info};

fn main() {
    let result = Config::from_args(Args::parse()).and_then(|config| {
        logging::init_logging(config.log_level);
        run(&config)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), error::CliError> {
    let input = fetch_input(config)?;

    output::write_input(&mut std::io::stdout().lock(), &input)?;
    Ok(())
}

/// Get the input, passing a `--session` token explicitly and an environment
/// token through the provider's configuration
fn fetch_input(config: &Config) -> Result<Input, error::CliError> {
    let builder = InputProvider::builder()
        .cache_dir(&config.cache_dir)
        .endpoint(config.endpoint.as_str())?;

    let input = match &config.session {
        Some((session, SessionSource::Flag)) => {
            debug!("using session from --session");
            builder
                .build()?
                .get_input_with_session(config.year, config.day, session)?
        }
        Some((session, SessionSource::Env(name))) => {
            debug!(variable = name, "using session from environment");
            builder
                .session(Some(session.clone()))
                .build()?
                .get_input(config.year, config.day)?
        }
        None => builder.build()?.get_input(config.year, config.day)?,
    };

    info!(
        "{}/{:02}: {} from {} ({})",
        config.year,
        config.day,
        output::format_size(input.len()),
        output::describe_source(input.source()),
        config.cache_dir.display()
    );

    Ok(input)
}
