//! Key-value tree model for locale resource files.
//!
//! A locale file is a JSON object whose values are either strings or nested
//! objects. [`Node`] mirrors that shape as a tagged union so the walkers in
//! [`crate::core::keys`] and [`crate::rules`] can match on structure instead of
//! inspecting `serde_json::Value` variants at every step.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Ordered children of a container node. Keeps the key order of the source file.
pub type Children = IndexMap<String, Node>;

/// Marker written in place of a value that cannot be resolved.
pub const VALUE_NOT_FOUND: &str = "[VALUE NOT FOUND]";

/// A node of a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal value. Never holds a JSON object.
    Leaf(Value),
    /// A nested mapping of key to node.
    Container(Children),
}

/// Failure to walk a dotted key path through a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("key \"{segment}\" not found while resolving \"{path}\"")]
    MissingSegment { path: String, segment: String },
    #[error("\"{segment}\" is a leaf while resolving \"{path}\"")]
    NotAContainer { path: String, segment: String },
}

impl Node {
    /// Create a leaf holding a string.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(Value::String(value.into()))
    }

    /// Create an empty container.
    pub fn empty() -> Self {
        Node::Container(Children::new())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    pub fn as_children(&self) -> Option<&Children> {
        match self {
            Node::Container(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Container(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the string content of a string leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Leaf(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Direct child lookup. Always `None` for leaves.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_children().and_then(|children| children.get(key))
    }

    /// Walk a dotted key path (e.g. `"storage.s3.region"`) from this node.
    ///
    /// Every segment but the last must name a container. Keys that themselves
    /// contain `.` cannot be addressed this way and resolve to an error.
    pub fn resolve(&self, path: &str) -> Result<&Node, LookupError> {
        let mut current = self;
        for segment in path.split('.') {
            let children = match current {
                Node::Container(children) => children,
                Node::Leaf(_) => {
                    return Err(LookupError::NotAContainer {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    });
                }
            };
            current = children
                .get(segment)
                .ok_or_else(|| LookupError::MissingSegment {
                    path: path.to_string(),
                    segment: segment.to_string(),
                })?;
        }
        Ok(current)
    }

    /// Convert into a `serde_json::Value`, keeping key order.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Leaf(value) => value.clone(),
            Node::Container(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Container(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
            other => Node::Leaf(other),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

/// Report formatting: string leaves print raw, everything else as compact JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(Value::String(s)) => f.write_str(s),
            Node::Leaf(other) => write!(f, "{}", other),
            Node::Container(_) => write!(f, "{}", self.to_value()),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(value) => value.serialize(serializer),
            Node::Container(children) => children.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}
