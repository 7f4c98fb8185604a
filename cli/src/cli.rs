use std::path::PathBuf;

/// Position matching CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "stancematch", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Score two position files against each other
    Distance(DistanceArgs),
}

#[derive(clap::Args, Debug)]
pub struct DistanceArgs {
    /// First position file (.json object or two-column .csv)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub a: PathBuf,

    /// Second position file (.json object or two-column .csv)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub b: PathBuf,

    /// Reject position values outside [-2, 2]
    #[arg(long)]
    pub strict: bool,

    /// Also print comparable count and difference totals
    #[arg(long)]
    pub breakdown: bool,
}
