//! Output of fetched inputs

use aoc_input::{Input, InputSource};
use std::io::{self, ErrorKind, Write};

/// Write the raw input bytes, unmodified
///
/// A closed pipe (e.g. `aoc 2015 1 | head`) is not an error.
pub fn write_input<W: Write>(writer: &mut W, input: &Input) -> io::Result<()> {
    let result = writer
        .write_all(input.as_bytes())
        .and_then(|()| writer.flush());

    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Human readable origin of an input
pub fn describe_source(source: InputSource) -> &'static str {
    match source {
        InputSource::Cache => "cache",
        InputSource::Remote => "remote",
    }
}

/// Format a byte count for display
pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}
