//! CLI entry point for the text grid inspection tool

use clap::Parser;
use textgrid::io::cli::{Cli, FileProcessor};

// Reports are the program's output
#[allow(clippy::print_stdout)]
fn main() -> textgrid::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    for report in processor.process()? {
        println!("{report}");
    }
    Ok(())
}
