use std::{fmt, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, de};

use crate::{positions::PositionSet, types::StatementId};

/// Every `(id, value)` entry of a JSON object, duplicates included, in file order.
struct RawPositions(Vec<(StatementId, f64)>);

impl<'de> Deserialize<'de> for RawPositions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> de::Visitor<'de> for RawVisitor {
            type Value = RawPositions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from statement id to position value")
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut access: A) -> Result<RawPositions, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<StatementId, f64>()? {
                    pairs.push(entry);
                }
                Ok(RawPositions(pairs))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

fn read_raw(path: &Path) -> Result<RawPositions> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open JSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse positions from {}", path.display()))
}

fn parse_raw(json: &str) -> Result<RawPositions> {
    serde_json::from_str(json).context("[io::json] Failed to parse positions from string")
}

/// Reads a position set from a JSON object file: `{ "<statement>": <value>, ... }`.
pub fn read_positions_json(path: &Path) -> Result<PositionSet> {
    Ok(PositionSet::from_pairs(read_raw(path)?.0))
}

/// Like [`read_positions_json`], but fails if *any* entry in the file is out of
/// range, including entries a later duplicate would overwrite.
pub fn try_read_positions_json(path: &Path) -> Result<PositionSet> {
    PositionSet::try_from_pairs(read_raw(path)?.0)
        .with_context(|| format!("[io::json] Out-of-range position in {}", path.display()))
}

/// Parses a position set from JSON text.
pub fn parse_positions_json(json: &str) -> Result<PositionSet> {
    Ok(PositionSet::from_pairs(parse_raw(json)?.0))
}

/// Parses a position set from JSON text, rejecting any out-of-range entry.
pub fn try_parse_positions_json(json: &str) -> Result<PositionSet> {
    PositionSet::try_from_pairs(parse_raw(json)?.0)
        .context("[io::json] Out-of-range position in string")
}

/// Serializes a position set to JSON text.
pub fn positions_to_json(positions: &PositionSet) -> Result<String> {
    serde_json::to_string(positions).context("[io::json] Failed to serialize positions")
}
