use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Stable key for a single policy statement.
/// Integer ids are kept as their decimal text, so `3` and `"3"` name the same statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatementId(Arc<str>);

impl StatementId {
    pub fn new(id: &str) -> Self { Self(Arc::from(id)) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for StatementId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for StatementId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}

impl From<&StatementId> for StatementId {
    fn from(id: &StatementId) -> Self { id.clone() }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for StatementId {
            fn from(id: $ty) -> Self { Self(Arc::from(id.to_string())) }
        })*
    };
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Serialize for StatementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StatementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = StatementId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a statement id (string or integer)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StatementId, E> { Ok(v.into()) }
            fn visit_string<E: de::Error>(self, v: String) -> Result<StatementId, E> { Ok(v.into()) }
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<StatementId, E> { Ok(v.into()) }
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<StatementId, E> { Ok(v.into()) }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
