mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::distance;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Distance(args) => distance::run(&cli, args),
    }
}
