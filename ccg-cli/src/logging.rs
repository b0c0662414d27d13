//! Logger setup.
//!
//! Text output goes through `log::info!`, so `info` lines are printed bare;
//! warnings and errors get a colored prefix. `--verbose` switches to
//! timestamped debug output, `--quiet` keeps only warnings and errors.
//! `RUST_LOG` still overrides the level when set.
//!
//! With `--format json` stdout carries only the JSON document and every log
//! line goes to stderr.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream;

use crate::cli_types::OutputFormat;

pub(crate) fn init_logging(quiet: bool, verbose: bool, format: OutputFormat) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let (target, stream) = log_target(format);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(move |buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(stream, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(stream, |t| t.red()),
                record.args()
            ),
            _ => writeln!(buf, "{}: {}", record.level(), record.args()),
        });
    }

    builder.target(target);
    builder.init();
}

fn log_target(format: OutputFormat) -> (env_logger::Target, Stream) {
    match format {
        OutputFormat::Text => (env_logger::Target::Stdout, Stream::Stdout),
        OutputFormat::Json => (env_logger::Target::Stderr, Stream::Stderr),
    }
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
