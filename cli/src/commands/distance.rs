use std::path::Path;

use anyhow::Result;
use stancematch::{PositionSet, compare, distance, io};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::DistanceArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!("[distance] a={} b={} strict={}", args.a.display(), args.b.display(), args.strict);
    }

    let a = load(&args.a, args.strict, cli.verbose)?;
    let b = load(&args.b, args.strict, cli.verbose)?;

    let cmp = compare(&a, &b);
    if cli.verbose > 0 && cmp.is_empty() {
        eprintln!("[distance] no statement answered by both sides");
    }

    println!("{}", distance(&a, &b));
    if args.breakdown {
        println!("comparable: {}", cmp.comparable());
        println!("sum_diff: {}", cmp.sum_diff());
        println!("max_possible: {}", cmp.max_possible());
    }

    Ok(())
}

/// Load a position file, picking the reader from the extension.
/// In strict mode every entry is range-checked, duplicates included.
fn load(path: &Path, strict: bool, verbose: u8) -> Result<PositionSet> {
    let is_csv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let positions = match (is_csv, strict) {
        (true, true) => io::try_read_positions_csv(path)?,
        (true, false) => io::read_positions_csv(path)?,
        (false, true) => io::try_read_positions_json(path)?,
        (false, false) => io::read_positions_json(path)?,
    };

    if verbose > 0 {
        eprintln!("[load] {} -> {} answered positions", path.display(), positions.len());
        if !positions.is_within_range() {
            eprintln!("[load] warning: {} has positions outside [-2, 2]", path.display());
        }
    }

    Ok(positions)
}
