//! CLI entry point for random block image generation

use clap::Parser;
use log::error;
use std::process::ExitCode;
use tilesheet::io::cli::{BlockCli, BlockProcessor};
use tilesheet::io::logging::init_logging;

fn main() -> ExitCode {
    let cli = BlockCli::parse();
    init_logging(cli.quiet);

    let mut processor = BlockProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
