//! Path-addressed reads and writes on a live value tree.
//!
//! Both directions fail soft: a missing intermediate container, or a segment
//! whose kind does not match the container (a key into an array, an index
//! into an object), yields `None` / `false` instead of an error.

use crate::path::{Path, Segment};
use serde_json::Value;

/// Value at `path`, or `None` as soon as a descent is impossible.
pub fn get<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(root, step)
}

/// Mutable value at `path`.
pub fn get_mut<'a>(root: &'a mut Value, path: &Path) -> Option<&'a mut Value> {
    path.iter().try_fold(root, step_mut)
}

/// Assign `value` at `path`.
///
/// Returns `false` without touching the tree when `path` is the root, when
/// the parent does not resolve to a container, or when the final segment
/// does not fit the parent. An index equal to the array length appends;
/// anything beyond it is rejected.
pub fn set(root: &mut Value, path: &Path, value: Value) -> bool {
    let Some((parent_path, last)) = path.split_last() else {
        return false;
    };
    let Some(parent) = get_mut(root, &parent_path) else {
        return false;
    };

    match (parent, last) {
        (Value::Object(map), Segment::Key(k)) => {
            map.insert(k.clone(), value);
            true
        }
        (Value::Array(items), Segment::Index(i)) => {
            if *i < items.len() {
                items[*i] = value;
                true
            } else if *i == items.len() {
                items.push(value);
                true
            } else {
                false
            }
        }
        _ => false,
    }
}

fn step<'a>(current: &'a Value, seg: &Segment) -> Option<&'a Value> {
    match (current, seg) {
        (Value::Object(map), Segment::Key(k)) => map.get(k),
        (Value::Array(items), Segment::Index(i)) => items.get(*i),
        _ => None,
    }
}

fn step_mut<'a>(current: &'a mut Value, seg: &Segment) -> Option<&'a mut Value> {
    match (current, seg) {
        (Value::Object(map), Segment::Key(k)) => map.get_mut(k),
        (Value::Array(items), Segment::Index(i)) => items.get_mut(*i),
        _ => None,
    }
}
