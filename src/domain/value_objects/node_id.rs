//! Node identifier value object
//!
//! Menu and feature ids arrive from the REST layer either as JSON numbers or
//! as strings. They are kept as text so both shapes compare equal once
//! normalized, and written back as integers whenever the text is one.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Stable identifier of a tree node, unique across one tree instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from any textual form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the textual form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer form, only when the text round-trips exactly (`"007"` does not)
    pub fn as_integer(&self) -> Option<i64> {
        let n: i64 = self.0.parse().ok()?;
        (n.to_string() == self.0).then_some(n)
    }

    /// Textual ids are compared without surrounding whitespace
    fn normalized(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    /// Read an id out of a raw JSON value.
    ///
    /// Numbers and non-blank strings qualify; anything else yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.trim().is_empty() => Some(Self::normalized(s)),
            _ => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_integer() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NodeIdDe {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NodeIdDe::deserialize(deserializer)? {
            NodeIdDe::Int(n) => Ok(Self::from(n)),
            NodeIdDe::Text(s) => Ok(Self::normalized(&s)),
        }
    }
}
