//! CLI entry point for the wallpaper generator

use billiardwall::io::cli::{BatchGenerator, Cli};
use billiardwall::io::logging;
use clap::Parser;

fn main() -> billiardwall::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.quiet, cli.verbose))?;
    let mut generator = BatchGenerator::new(cli);
    generator.run()?;
    Ok(())
}
