//! `anchorkit-config` - Pre-deployment validator for AnchorKit configuration

use clap::Parser;

use anchorkit_config::cli::args::Cli;
use anchorkit_config::cli::commands;
use anchorkit_config::observability::{LogSettings, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(&LogSettings::from_cli(&cli));

    match commands::dispatch(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(e.exit_code());
        }
    }
}
