//! benchdex CLI — benchmark-paper dataset builder.
//!
//! Extracts benchmark-related papers from conference title lists and
//! merges independently classified subsets into one canonical dataset.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
