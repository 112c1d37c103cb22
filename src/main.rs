//! CLI entry point for rendering the evolving tessellation animation

use clap::Parser;
use evotess::io::cli::{AnimationRunner, Cli};
use evotess::io::logging::init_logging;

fn main() -> evotess::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut runner = AnimationRunner::new(cli);
    runner.process()
}
