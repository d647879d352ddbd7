//! CLI entry point for solid-color tile generation

use clap::Parser;
use log::error;
use std::process::ExitCode;
use tilesheet::io::cli::{TileCli, TileProcessor};
use tilesheet::io::logging::init_logging;

fn main() -> ExitCode {
    let cli = TileCli::parse();
    init_logging(cli.quiet);

    let mut processor = TileProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
