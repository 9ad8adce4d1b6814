//! Input records for graph construction

use serde::Deserialize;

/// One flat input record: a key, its payload, and the key of the parent it
/// hangs under. Entries without a parent key denote roots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry<T> {
    pub key: String,
    pub payload: T,
    #[serde(default)]
    pub parent: Option<String>,
}

impl<T> Entry<T> {
    pub fn new(key: impl Into<String>, payload: T, parent: Option<String>) -> Self {
        Self {
            key: key.into(),
            payload,
            parent,
        }
    }

    /// Entry without a parent key.
    pub fn root(key: impl Into<String>, payload: T) -> Self {
        Self::new(key, payload, None)
    }

    /// Entry attached under `parent`.
    pub fn child(key: impl Into<String>, payload: T, parent: impl Into<String>) -> Self {
        Self::new(key, payload, Some(parent.into()))
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
