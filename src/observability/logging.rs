//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`; the validation report owns
//! stdout. Verbosity flags raise the level of this crate's events only, so
//! `-vv` shows the validation pipeline without dependency noise.
//! `ANCHORKIT_LOG_LEVEL` (EnvFilter syntax) replaces the flag-derived filter.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice};

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_LEVEL_ENV: &str = "ANCHORKIT_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Logging options collected from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    /// Output format
    pub format: LogFormat,
    /// Number of `-v` flags
    pub verbosity: u8,
    /// `--quiet`: no diagnostics at all, whatever the environment says
    pub quiet: bool,
    /// ANSI color choice
    pub color: ColorChoice,
}

impl LogSettings {
    /// Extracts the logging options from a parsed invocation.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.log_format,
            verbosity: cli.verbose,
            quiet: cli.quiet,
            color: cli.color,
        }
    }

    /// Filter used when `ANCHORKIT_LOG_LEVEL` is unset.
    ///
    /// Dependencies stay at `warn`; only this crate follows `-v`.
    #[must_use]
    pub fn default_directive(&self) -> String {
        if self.quiet {
            return "off".to_string();
        }
        match self.verbosity {
            0 => "warn".to_string(),
            v => format!("warn,anchorkit_config={}", verbosity_to_level(v)),
        }
    }

    fn filter(&self) -> EnvFilter {
        if self.quiet {
            return EnvFilter::new("off");
        }
        EnvFilter::try_from_env(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Maps a verbosity count to a level name: 0 warn, 1 info, 2 debug, 3+ trace.
#[must_use]
pub const fn verbosity_to_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Resolves the color choice against the terminal and `NO_COLOR`.
const fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color_set: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color_set,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()` so a second call (e.g. in tests) is a no-op.
pub fn init_logging(settings: &LogSettings) {
    let filter = settings.filter();
    let show_target = settings.verbosity >= 2;

    match settings.format {
        LogFormat::Human => {
            let ansi = use_ansi(
                settings.color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
