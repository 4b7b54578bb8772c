//! The `enerji` command: prints the dashboard tables and exports them to CSV.
//!
//! The binary is a thin wrapper; parsing lives in [`cli`], handlers in [`commands`] and
//! text layout in [`render`], so all of it can be driven from tests.

pub mod cli;
pub mod commands;
pub mod render;

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub use cli::Cli;
pub use commands::run;

/// Installs the stderr logger: warnings only, or everything down to debug when verbose.
pub fn init_logging(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_installs_once() {
        assert!(init_logging(true).is_ok());
        assert!(init_logging(false).is_err());
    }
}
