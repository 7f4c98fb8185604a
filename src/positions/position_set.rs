use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};

use crate::{positions::{MAX_POSITION, MIN_POSITION, PositionError}, types::StatementId};

/// Immutable mapping from statement to position value.
///
/// A statement missing from the set and a statement given with value `0.0`
/// are the same thing: "not answered". Zeros are never stored, so no
/// accessor (equality included) can tell the two apart.
///
/// Entries are kept in statement order so that every walk over a set is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSet {
    positions: BTreeMap<StatementId, f64>,
}

impl PositionSet {
    /// Empty set (nothing answered).
    pub fn new() -> Self { Self::default() }

    /// Build from `(id, value)` pairs. Later duplicates overwrite earlier ones.
    /// Values are taken as-is; out-of-range input is the caller's problem.
    pub fn from_pairs<I, K>(pairs: I) -> Self where I: IntoIterator<Item = (K, f64)>, K: Into<StatementId> {
        let mut positions = BTreeMap::new();
        for (id, value) in pairs { put(&mut positions, id.into(), value) }
        Self { positions }
    }

    /// Like [`PositionSet::from_pairs`], but rejects the first value outside
    /// `[MIN_POSITION, MAX_POSITION]`.
    pub fn try_from_pairs<I, K>(pairs: I) -> Result<Self, PositionError> where I: IntoIterator<Item = (K, f64)>, K: Into<StatementId> {
        let mut positions = BTreeMap::new();
        for (id, value) in pairs {
            let id = id.into();
            if !in_range(value) {
                return Err(PositionError::OutOfRangeValue { id, value });
            }
            put(&mut positions, id, value);
        }
        Ok(Self { positions })
    }

    /// Position on `id`, or `0.0` if the statement was skipped or never asked.
    #[inline]
    pub fn value(&self, id: &StatementId) -> f64 {
        self.positions.get(id).copied().unwrap_or(0.0)
    }

    /// Number of answered (non-zero) statements.
    #[inline] pub fn len(&self) -> usize { self.positions.len() }

    /// True if nothing was answered.
    #[inline] pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Answered statements in statement order.
    pub fn iter(&self) -> impl Iterator<Item = (&StatementId, f64)> + '_ {
        self.positions.iter().map(|(id, &value)| (id, value))
    }

    /// True if every stored value lies in `[MIN_POSITION, MAX_POSITION]`.
    pub fn is_within_range(&self) -> bool {
        self.positions.values().all(|&value| in_range(value))
    }
}

#[inline]
fn in_range(value: f64) -> bool { (MIN_POSITION..=MAX_POSITION).contains(&value) }

/// Last write wins; a zero erases whatever was there.
#[inline]
fn put(positions: &mut BTreeMap<StatementId, f64>, id: StatementId, value: f64) {
    if value == 0.0 { positions.remove(&id); } else { positions.insert(id, value); }
}

impl<K: Into<StatementId>> FromIterator<(K, f64)> for PositionSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self { Self::from_pairs(iter) }
}

impl Serialize for PositionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.positions.len()))?;
        for (id, value) in &self.positions {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PositionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionsVisitor;

        impl<'de> de::Visitor<'de> for PositionsVisitor {
            type Value = PositionSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from statement id to position value")
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut access: A) -> Result<PositionSet, A::Error> {
                let mut positions = BTreeMap::new();
                while let Some((id, value)) = access.next_entry::<StatementId, f64>()? {
                    put(&mut positions, id, value);
                }
                Ok(PositionSet { positions })
            }
        }

        deserializer.deserialize_map(PositionsVisitor)
    }
}
