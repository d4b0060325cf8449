//! Identifier types shared by the wire models and tracked state.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A 64-bit Snowflake identifier carried as a string.
///
/// The Control API encodes identifiers as JSON numbers on some endpoints
/// and JSON strings on others. Both decode to the same value, and the
/// identifier always serializes back out as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SnowflakeId(String);

impl SnowflakeId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the identifier string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// True when no identifier was present on the wire.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SnowflakeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SnowflakeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SnowflakeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<SnowflakeId> for String {
    fn from(id: SnowflakeId) -> Self {
        id.0
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = SnowflakeId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an identifier encoded as a JSON string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SnowflakeId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(SnowflakeId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(SnowflakeId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(SnowflakeId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for SnowflakeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}
