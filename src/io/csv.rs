use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType}};

use crate::{positions::PositionSet, types::StatementId};

/// Reads a position set from a CSV file with a header row and two columns:
/// statement id, position value. Whitespace around either cell is ignored.
pub fn read_positions_csv(path: &Path) -> Result<PositionSet> {
    Ok(PositionSet::from_pairs(pairs_from_frame(read_frame(path)?)?))
}

/// Like [`read_positions_csv`], but fails if *any* row is out of range,
/// including rows a later duplicate would overwrite.
pub fn try_read_positions_csv(path: &Path) -> Result<PositionSet> {
    PositionSet::try_from_pairs(pairs_from_frame(read_frame(path)?)?)
        .with_context(|| format!("[io::csv] Out-of-range position in {}", path.display()))
}

/// Parses a position set from CSV text.
pub fn parse_positions_csv(csv: &str) -> Result<PositionSet> {
    Ok(PositionSet::from_pairs(pairs_from_frame(parse_frame(csv)?)?))
}

/// Parses a position set from CSV text, rejecting any out-of-range row.
pub fn try_parse_positions_csv(csv: &str) -> Result<PositionSet> {
    PositionSet::try_from_pairs(pairs_from_frame(parse_frame(csv)?)?)
        .context("[io::csv] Out-of-range position in string")
}

fn read_frame(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv] Failed to open CSV file: {}", path.display()))?;
    positions_csv_options()
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv] Failed to read CSV from {:?}", path))
}

fn parse_frame(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(positions_csv_options())
        .finish()
        .context("[io::csv] Failed to read CSV from string")
}

/// Read every column as text so ids like "007" keep their leading zeros.
fn positions_csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Every row as a trimmed `(id, value)` pair, duplicates included, in file order.
fn pairs_from_frame(df: DataFrame) -> Result<Vec<(StatementId, f64)>> {
    ensure!(df.width() >= 2, "[io::csv] CSV must have two columns: statement,value");

    let names = df.get_column_names();
    let ids = df.column(names[0])?.cast(&DataType::String)?;
    let values = df.column(names[1])?.cast(&DataType::String)?;

    ids.str()?.iter()
        .zip(values.str()?.iter())
        .enumerate()
        .map(|(row, (id, value))| {
            let row = row + 1;
            let id = id.map(str::trim).filter(|id| !id.is_empty())
                .with_context(|| format!("[io::csv] Data row {row} has no statement id"))?;
            let value = value.map(str::trim).filter(|value| !value.is_empty())
                .with_context(|| format!("[io::csv] Data row {row} has no value"))?;
            let value: f64 = value.parse()
                .with_context(|| format!("[io::csv] Data row {row}: {value:?} is not a number"))?;
            Ok((StatementId::from(id), value))
        })
        .collect()
}
