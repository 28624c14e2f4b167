//! Record identifiers as the data store writes them
//!
//! The store assigns identifiers. Some rows carry numbers, some numeric
//! strings, some opaque strings such as `"a1f3"`. An `EntityId` keeps the
//! form it was read in and writes it back unchanged; comparison treats
//! `7` and `"7"` as the same record.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
use serde_json::Value;

use crate::errors::SharedError;

#[derive(Debug, Clone)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

/// Normalized view used for equality, hashing and ordering
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum IdKey<'a> {
    Number(i64),
    Text(&'a str),
}

impl EntityId {
    /// Integer value when the identifier is numeric in either form
    pub fn as_number(&self) -> Option<i64> {
        match self.key() {
            IdKey::Number(n) => Some(n),
            IdKey::Text(_) => None,
        }
    }

    /// Whether this identifier can refer to a record
    pub fn is_set(&self) -> bool {
        match self.key() {
            IdKey::Number(n) => n > 0,
            IdKey::Text(text) => !text.is_empty(),
        }
    }

    fn key(&self) -> IdKey<'_> {
        match self {
            EntityId::Number(n) => IdKey::Number(*n),
            EntityId::Text(text) => match text.trim().parse() {
                Ok(n) => IdKey::Number(n),
                Err(_) => IdKey::Text(text.trim()),
            },
        }
    }

    /// Read an identifier from any JSON value; `None` for null, blanks and
    /// anything that is neither a string nor an integer
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .map(EntityId::Number),
            Value::String(text) if !text.trim().is_empty() => Some(EntityId::Text(text.clone())),
            _ => None,
        }
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Number(0)
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Numeric identifiers first, ascending; then opaque ones alphabetically
impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(text: &str) -> Self {
        EntityId::Text(text.to_string())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntityId::Number(n) => serializer.serialize_i64(*n),
            EntityId::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        EntityId::from_value(&value).ok_or_else(|| {
            D::Error::custom(SharedError::InvalidIdentifier {
                input: value.to_string(),
            })
        })
    }
}

/// Foreign keys: unreadable, blank and non-positive values read as unset
pub mod reference_format {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Option<EntityId>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => id.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<EntityId>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(EntityId::from_value(&value).filter(EntityId::is_set))
    }
}
