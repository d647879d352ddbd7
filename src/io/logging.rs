//! Terminal logger setup shared by both binaries

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Log level for a run: info normally, warnings and errors only when quiet
pub const fn level_for(quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install a terminal logger; a no-op if a logger is already installed
///
/// Informational lines go to stdout, warnings and errors to stderr.
pub fn init_logging(quiet: bool) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    // Only fails when a logger is already set, e.g. across tests
    let _ = TermLogger::init(
        level_for(quiet),
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
