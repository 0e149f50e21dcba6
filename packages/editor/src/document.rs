//! # Document Handle
//!
//! Host-side owner of a JSON value. The editor core never stores a value;
//! a `Document` is the data store a host keeps it in, optionally backed by
//! a file on disk.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Walk → Save
//!   ↓      ↓      ↓      ↓
//! File  Session  Rows   File
//! ```

use crate::EditorError;
use jsontree_common::Value;
use std::path::PathBuf;

/// JSON document being edited
#[derive(Debug)]
pub struct Document {
    /// Backing file, if any
    pub path: Option<PathBuf>,

    value: Value,

    dirty: bool,
}

impl Document {
    /// Memory-backed document
    pub fn from_value(value: Value) -> Self {
        Self {
            path: None,
            value,
            dirty: false,
        }
    }

    /// Parse a memory-backed document from JSON text
    pub fn from_source(source: &str) -> Result<Self, EditorError> {
        Ok(Self::from_value(serde_json::from_str(source)?))
    }

    /// Load a file-backed document
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&source)?;

        Ok(Self {
            path: Some(path),
            value,
            dirty: false,
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable value. Callers that change it must call [`mark_dirty`](Self::mark_dirty).
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the document back to its file as pretty JSON
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.as_ref().ok_or(EditorError::NotFileBacked)?;
        let mut text = serde_json::to_string_pretty(&self.value)?;
        text.push('\n');
        std::fs::write(path, text)?;
        self.dirty = false;
        Ok(())
    }
}
