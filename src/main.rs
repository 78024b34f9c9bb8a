//! CLI entry point for the randomized collage generator

use clap::Parser;
use randcollage::io::cli::{Cli, CollageProcessor};

fn main() -> randcollage::Result<()> {
    let cli = Cli::parse();
    let mut processor = CollageProcessor::new(cli);
    processor.process()
}
