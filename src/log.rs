//! Initialisation of the program logger.
//!
//! Messages go through the `log` facade; the binary installs a `fern`
//! dispatcher that colours output when writing to a terminal.
use anyhow::{bail, Result};
use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};
use std::env;
use std::fmt::Arguments;
use std::io::IsTerminal;

/// The default log level for the program.
///
/// Used as a fallback if the user hasn't specified something else with the
/// STOCHASTIC_INVENTORY_LOG_LEVEL environment variable or the settings file.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log level
const LOG_LEVEL_ENV_VAR: &str = "STOCHASTIC_INVENTORY_LOG_LEVEL";

/// Convert a log level name into a [`LevelFilter`].
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    Ok(match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        unknown => bail!("Unknown log level: {}", unknown),
    })
}

/// Initialise the program logger.
///
/// The environment variable takes precedence over the level from the
/// settings file. Info and below go to stdout; warnings and errors to stderr.
pub fn init(log_level_from_settings: Option<&str>) -> Result<()> {
    let log_level = env::var(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| {
        log_level_from_settings
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string()
    });
    let log_level = parse_level(&log_level)?;

    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    let use_colour_stdout = std::io::stdout().is_terminal();
    let use_colour_stderr = std::io::stderr().is_terminal();

    Dispatch::new()
        .chain(
            Dispatch::new()
                .filter(|metadata| metadata.level() > LevelFilter::Warn)
                .format(move |out, message, record| {
                    write_log(out, message, record, use_colour_stdout.then_some(&colours));
                })
                .level(log_level)
                .chain(std::io::stdout()),
        )
        .chain(
            Dispatch::new()
                .format(move |out, message, record| {
                    write_log(out, message, record, use_colour_stderr.then_some(&colours));
                })
                .level(log_level.min(LevelFilter::Warn))
                .chain(std::io::stderr()),
        )
        .apply()?;

    Ok(())
}

/// Write a log message, colouring the level when `colours` is given.
fn write_log(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colours: Option<&ColoredLevelConfig>,
) {
    let timestamp = Local::now().format("%H:%M:%S");
    match colours {
        Some(colours) => out.finish(format_args!(
            "[{} {}] {}",
            timestamp,
            colours.color(record.level()),
            message
        )),
        None => out.finish(format_args!(
            "[{} {}] {}",
            timestamp,
            record.level(),
            message
        )),
    }
}
