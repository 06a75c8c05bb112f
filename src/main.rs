//! CLI entry point for the button sheet generator

use buttonsheet::io::cli::{Cli, FileProcessor};
use buttonsheet::io::logging::init_logging;
use clap::Parser;

fn main() -> buttonsheet::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let processor = FileProcessor::new(cli);
    processor.process()
}
