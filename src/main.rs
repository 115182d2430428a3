//! CLI entry point for the hexagonal indicator grid generator

use clap::Parser;
use hexmock::io::cli::{Cli, GridProcessor};

fn main() -> hexmock::Result<()> {
    let cli = Cli::parse();
    let processor = GridProcessor::new(cli);
    processor.process()
}
