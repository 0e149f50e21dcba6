//! # Value Mutations
//!
//! Structural edits on a live value tree that keep the expansion set in
//! step with the tree's shape.
//!
//! ## Ordering
//!
//! Every operation validates completely before it writes anything, so a
//! rejected mutation leaves both the value and the expansion set exactly as
//! they were. Expansion bookkeeping that depends on array indices (shift
//! after removal, remap after move) runs against the pre-splice array:
//!
//! ```text
//! validate → prune / renumber expansion set → splice value
//! ```
//!
//! ## Semantics
//!
//! ### AddProperty
//! - Last write wins if the key exists; the replaced subtree's expansion
//!   entries are pruned
//! - The parent is expanded so the new child is visible
//!
//! ### RemoveElement
//! - Trailing elements shift down by one, and so do their expansion entries
//!
//! ### MoveElement
//! - Target index is clamped into the array
//! - Elements between the two positions shift one step toward the vacated slot

use crate::expansion::ExpansionSet;
use jsontree_common::{accessor, DataType, Path, Segment, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mutating operation, as issued by UI event handlers or a script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Set `key` on the object at `parent_path`
    AddProperty {
        parent_path: Path,
        key: String,
        #[serde(default = "empty_string")]
        value: Value,
    },

    /// Delete `key` from the object at `parent_path`
    RemoveProperty { parent_path: Path, key: String },

    /// Append to the array at `parent_path`
    AddElement {
        parent_path: Path,
        #[serde(default = "empty_string")]
        value: Value,
    },

    /// Delete one element from the array at `parent_path`
    RemoveElement { parent_path: Path, index: i64 },

    /// Delete whatever node `path` addresses, from its object or array parent
    RemoveNode { path: Path },

    /// Reorder one element within the array at `parent_path`
    MoveElement {
        parent_path: Path,
        from_index: i64,
        to_index: i64,
    },

    /// Swap an element with its predecessor
    MoveUp { parent_path: Path, index: i64 },

    /// Swap an element with its successor
    MoveDown { parent_path: Path, index: i64 },

    /// Replace the value at `path`
    SetValue { path: Path, value: Value },

    /// Negate the boolean at `path`
    ToggleBoolean { path: Path },

    /// Store inline-edit text at `path`, converted for `data_type`
    CommitEdit {
        path: Path,
        data_type: DataType,
        text: String,
    },
}

fn empty_string() -> Value {
    Value::String(String::new())
}

/// Why a mutation was not applied. None of these are fatal: a stale path
/// from an old render simply means nothing changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Malformed path: {0:?}")]
    MalformedPath(String),

    #[error("Node not found: {0}")]
    NotFound(String),

    #[error("Node is not an object: {0}")]
    NotAnObject(String),

    #[error("Node is not an array: {0}")]
    NotAnArray(String),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Move does not change position")]
    SamePosition,

    #[error("Node is not a boolean: {0}")]
    NotBoolean(String),

    #[error("Cannot replace the root value")]
    RootReplacement,

    #[error("Editor is read-only")]
    ReadOnly,
}

impl Mutation {
    /// Apply to `root`, keeping `expanded` consistent.
    ///
    /// On `Err` neither `root` nor `expanded` has been modified.
    pub fn apply(
        &self,
        root: &mut Value,
        expanded: &mut ExpansionSet,
    ) -> Result<(), MutationError> {
        match self {
            Mutation::AddProperty { parent_path, key, value } => {
                add_property(root, expanded, parent_path, key, value.clone())
            }
            Mutation::RemoveProperty { parent_path, key } => {
                remove_property(root, expanded, parent_path, key)
            }
            Mutation::AddElement { parent_path, value } => {
                add_element(root, expanded, parent_path, value.clone())
            }
            Mutation::RemoveElement { parent_path, index } => {
                remove_element(root, expanded, parent_path, *index)
            }
            Mutation::RemoveNode { path } => remove_node(root, expanded, path),
            Mutation::MoveElement { parent_path, from_index, to_index } => {
                move_element(root, expanded, parent_path, *from_index, *to_index)
            }
            Mutation::MoveUp { parent_path, index } => move_up(root, expanded, parent_path, *index),
            Mutation::MoveDown { parent_path, index } => {
                move_down(root, expanded, parent_path, *index)
            }
            Mutation::SetValue { path, value } => set_value(root, expanded, path, value.clone()),
            Mutation::ToggleBoolean { path } => toggle_boolean(root, expanded, path),
            Mutation::CommitEdit { path, data_type, text } => {
                commit_edit(root, expanded, path, *data_type, text)
            }
        }
    }

    /// Debug name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddProperty { .. } => "AddProperty",
            Mutation::RemoveProperty { .. } => "RemoveProperty",
            Mutation::AddElement { .. } => "AddElement",
            Mutation::RemoveElement { .. } => "RemoveElement",
            Mutation::RemoveNode { .. } => "RemoveNode",
            Mutation::MoveElement { .. } => "MoveElement",
            Mutation::MoveUp { .. } => "MoveUp",
            Mutation::MoveDown { .. } => "MoveDown",
            Mutation::SetValue { .. } => "SetValue",
            Mutation::ToggleBoolean { .. } => "ToggleBoolean",
            Mutation::CommitEdit { .. } => "CommitEdit",
        }
    }
}

pub fn add_property(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    key: &str,
    value: Value,
) -> Result<(), MutationError> {
    let map = object_at(root, parent_path)?;

    if let Some(previous) = map.insert(key.to_string(), value) {
        if DataType::of(&previous).is_container() {
            expanded.prune_subtree(&parent_path.child(key));
        }
    }

    if !parent_path.is_root() {
        expanded.expand(parent_path.clone());
    }
    Ok(())
}

pub fn remove_property(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    key: &str,
) -> Result<(), MutationError> {
    let map = object_at(root, parent_path)?;
    let child = parent_path.child(key);
    if !map.contains_key(key) {
        return Err(MutationError::NotFound(child.to_string()));
    }

    expanded.prune_subtree(&child);
    map.shift_remove(key);
    Ok(())
}

pub fn add_element(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    value: Value,
) -> Result<(), MutationError> {
    let items = array_at(root, parent_path)?;
    items.push(value);

    if !parent_path.is_root() {
        expanded.expand(parent_path.clone());
    }
    Ok(())
}

pub fn remove_element(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    index: i64,
) -> Result<(), MutationError> {
    let items = array_at(root, parent_path)?;
    let len = items.len();
    let index = checked_index(index, len)?;

    // Prune and shift read the pre-removal indices
    expanded.prune_subtree(&parent_path.child(index));
    expanded.shift_after_removal(parent_path, index, len);
    items.remove(index);
    Ok(())
}

/// Remove the node at `path`, dispatching on its final segment: an index
/// removes an array element, a key removes an object property.
pub fn remove_node(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    path: &Path,
) -> Result<(), MutationError> {
    let (parent, last) = path
        .split_last()
        .ok_or_else(|| MutationError::MalformedPath(path.to_string()))?;

    match last {
        Segment::Index(i) => {
            let index =
                i64::try_from(*i).map_err(|_| MutationError::MalformedPath(path.to_string()))?;
            remove_element(root, expanded, &parent, index)
        }
        Segment::Key(k) => remove_property(root, expanded, &parent, k),
    }
}

pub fn move_element(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    from_index: i64,
    to_index: i64,
) -> Result<(), MutationError> {
    let items = array_at(root, parent_path)?;
    let len = items.len();
    let from = checked_index(from_index, len)?;

    // `from` is valid, so the array is non-empty
    let last = (len - 1) as i64;
    let to = to_index.clamp(0, last) as usize;
    if from == to {
        return Err(MutationError::SamePosition);
    }

    // Remap reads the pre-move indices
    expanded.remap_after_move(parent_path, from, to, len);
    let element = items.remove(from);
    items.insert(to, element);
    Ok(())
}

pub fn move_up(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    index: i64,
) -> Result<(), MutationError> {
    let len = array_at(root, parent_path)?.len();
    if index <= 0 {
        return Err(MutationError::IndexOutOfRange { index, len });
    }
    move_element(root, expanded, parent_path, index, index - 1)
}

pub fn move_down(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    parent_path: &Path,
    index: i64,
) -> Result<(), MutationError> {
    let len = array_at(root, parent_path)?.len();
    // Compare against the last slot rather than adding to `index`
    if index < 0 || index >= len as i64 - 1 {
        return Err(MutationError::IndexOutOfRange { index, len });
    }
    move_element(root, expanded, parent_path, index, index + 1)
}

/// Replace the value at `path`. A replaced container takes its expansion
/// entries with it.
pub fn set_value(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    path: &Path,
    value: Value,
) -> Result<(), MutationError> {
    if path.is_root() {
        return Err(MutationError::RootReplacement);
    }

    let replaces_container = accessor::get(root, path)
        .map(|old| DataType::of(old).is_container())
        .unwrap_or(false);

    if !accessor::set(root, path, value) {
        return Err(MutationError::NotFound(path.to_string()));
    }

    if replaces_container {
        expanded.prune_subtree(path);
    }
    Ok(())
}

pub fn toggle_boolean(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    path: &Path,
) -> Result<(), MutationError> {
    let current = match accessor::get(root, path) {
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(MutationError::NotBoolean(path.to_string())),
        None => return Err(MutationError::NotFound(path.to_string())),
    };
    set_value(root, expanded, path, Value::Bool(!current))
}

pub fn commit_edit(
    root: &mut Value,
    expanded: &mut ExpansionSet,
    path: &Path,
    data_type: DataType,
    text: &str,
) -> Result<(), MutationError> {
    set_value(root, expanded, path, parse_edit(data_type, text))
}

/// Convert inline-edit text into a value of `data_type`.
///
/// Numbers keep integer form when the text is an integer; anything that is
/// not a finite number becomes `0`. Every other type stores the raw text.
pub fn parse_edit(data_type: DataType, text: &str) -> Value {
    match data_type {
        DataType::Number => {
            let trimmed = text.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Value::from(i);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::from(0))
        }
        _ => Value::String(text.to_string()),
    }
}

fn object_at<'a>(
    root: &'a mut Value,
    path: &Path,
) -> Result<&'a mut serde_json::Map<String, Value>, MutationError> {
    match accessor::get_mut(root, path) {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(MutationError::NotAnObject(path.to_string())),
        None => Err(MutationError::NotFound(path.to_string())),
    }
}

fn array_at<'a>(root: &'a mut Value, path: &Path) -> Result<&'a mut Vec<Value>, MutationError> {
    match accessor::get_mut(root, path) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(MutationError::NotAnArray(path.to_string())),
        None => Err(MutationError::NotFound(path.to_string())),
    }
}

fn checked_index(index: i64, len: usize) -> Result<usize, MutationError> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < len)
        .ok_or(MutationError::IndexOutOfRange { index, len })
}
