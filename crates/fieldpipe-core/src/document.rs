//! Documents and path-based field access
//!
//! A [`Document`] owns a root map and is the unit a pipeline mutates. Fields
//! are addressed by dotted paths such as `user.address.city`; each segment
//! indexes into a nested map.
//!
//! # Example
//!
//! ```rust
//! use fieldpipe_core::Document;
//! use serde_json::json;
//!
//! let mut doc = Document::try_from(json!({"user": {"name": "alice"}})).unwrap();
//! doc.set("user.name", "bob").unwrap();
//! assert_eq!(doc.get("user.name").unwrap().as_str(), Some("bob"));
//! assert!(!doc.has_field("user.email"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path;
use crate::value::{self, Map, Value};

/// A mutable, single-owner document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Map,
}

impl Document {
    /// Wrap an already-built root map
    pub fn new(root: Map) -> Self {
        Self { root }
    }

    /// Borrow the root map
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Take ownership of the root map
    pub fn into_inner(self) -> Map {
        self.root
    }

    /// Render the document as JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(value::map_to_json(&self.root))
    }

    /// Get the value at `path`.
    ///
    /// Fails with [`Error::PathNotFound`] when any segment is missing or an
    /// intermediate value is not a map. An explicit null is returned as
    /// [`Value::Null`].
    pub fn get(&self, path: &str) -> Result<&Value> {
        let (parent, key) = path::parent(&self.root, path)?;
        parent.get(key).ok_or_else(|| Error::PathNotFound {
            path: path.to_string(),
        })
    }

    /// Mutably borrow the value at `path`
    pub fn get_mut(&mut self, path: &str) -> Result<&mut Value> {
        let (parent, key) = path::parent_mut(&mut self.root, path)?;
        parent.get_mut(key).ok_or_else(|| Error::PathNotFound {
            path: path.to_string(),
        })
    }

    /// Insert or overwrite the value at `path`.
    ///
    /// Every intermediate map must already exist; they are never created.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let (parent, key) = path::parent_mut(&mut self.root, path)?;
        parent.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Remove and return the value at `path`.
    ///
    /// The parent map is kept even when it becomes empty.
    pub fn remove(&mut self, path: &str) -> Result<Value> {
        let (parent, key) = path::parent_mut(&mut self.root, path)?;
        parent.remove(key).ok_or_else(|| Error::PathNotFound {
            path: path.to_string(),
        })
    }

    /// Whether `path` resolves to a value, null included
    pub fn has_field(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }
}

impl From<Map> for Document {
    fn from(root: Map) -> Self {
        Self::new(root)
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match Value::from(json) {
            Value::Map(root) => Ok(Self::new(root)),
            other => Err(Error::InvalidDocument {
                message: format!("document root must be a map, got {}", other.type_name()),
            }),
        }
    }
}
