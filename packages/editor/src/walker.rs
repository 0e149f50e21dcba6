//! # Tree Walk
//!
//! Produces the visible rows of a value tree, depth-first and pre-order,
//! driven entirely by the expansion set. Object entries come out in
//! insertion order, array elements by index. A container's children are
//! visited only when the container's path is expanded.
//!
//! The walk is a lazy iterator with an explicit stack, so it can be
//! stopped early and restarted cheaply. Identical inputs always produce
//! identical output.
//!
//! A root container is not a row itself: its children are the top-level
//! rows at depth 0. A root scalar yields a single row with key `(root)`
//! and the empty path.

use crate::expansion::ExpansionSet;
use jsontree_common::{DataType, Path, Segment, Value};
use serde::Serialize;
use tracing::instrument;

/// Key shown for a scalar root value.
pub const ROOT_KEY: &str = "(root)";

/// Summary of one visible node, handed to the rendering side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub path: Path,
    pub key: String,
    pub depth: usize,
    pub data_type: DataType,
    pub is_array_element: bool,
    pub array_index: Option<usize>,
    pub has_children: bool,
    pub child_count: usize,
    pub is_expanded: bool,
}

/// A visible row together with the value it describes.
#[derive(Debug, Clone)]
pub struct VisibleNode<'a> {
    pub node: NodeDescriptor,
    pub value: &'a Value,
}

enum Children<'a> {
    Object(serde_json::map::Iter<'a>),
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
}

struct Frame<'a> {
    base: Path,
    depth: usize,
    children: Children<'a>,
}

impl<'a> Frame<'a> {
    fn new(value: &'a Value, base: Path, depth: usize) -> Option<Self> {
        let children = match value {
            Value::Object(map) => Children::Object(map.iter()),
            Value::Array(items) => Children::Array(items.iter().enumerate()),
            _ => return None,
        };
        Some(Self { base, depth, children })
    }

    fn next_child(&mut self) -> Option<(Segment, &'a Value)> {
        match &mut self.children {
            Children::Object(entries) => entries
                .next()
                .map(|(k, v)| (Segment::Key(k.clone()), v)),
            Children::Array(items) => items.next().map(|(i, v)| (Segment::Index(i), v)),
        }
    }
}

/// Lazy iterator over the visible rows of a tree.
pub struct TreeWalk<'a> {
    expanded: &'a ExpansionSet,
    max_depth: Option<usize>,
    root_scalar: Option<&'a Value>,
    stack: Vec<Frame<'a>>,
}

impl<'a> TreeWalk<'a> {
    pub fn new(root: &'a Value, expanded: &'a ExpansionSet) -> Self {
        let mut stack = Vec::new();
        let mut root_scalar = None;

        match Frame::new(root, Path::root(), 0) {
            Some(frame) => stack.push(frame),
            None => root_scalar = Some(root),
        }

        Self {
            expanded,
            max_depth: None,
            root_scalar,
            stack,
        }
    }

    /// Stop descending below `depth`. Rows at `depth` are still produced.
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = VisibleNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.root_scalar.take() {
            return Some(VisibleNode {
                node: describe(Path::root(), ROOT_KEY.to_string(), 0, value, false),
                value,
            });
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some((seg, value)) = frame.next_child() else {
                self.stack.pop();
                continue;
            };

            let depth = frame.depth;
            let path = frame.base.child(seg.clone());
            let key = match &seg {
                Segment::Key(k) => k.clone(),
                Segment::Index(i) => i.to_string(),
            };

            let is_expanded = self.expanded.is_expanded(&path);
            let mut node = describe(path, key, depth, value, is_expanded);
            if let Segment::Index(i) = seg {
                node.is_array_element = true;
                node.array_index = Some(i);
            }

            if is_expanded && self.within_depth(depth + 1) {
                if let Some(child) = Frame::new(value, node.path.clone(), depth + 1) {
                    self.stack.push(child);
                }
            }

            return Some(VisibleNode { node, value });
        }
    }
}

fn describe(
    path: Path,
    key: String,
    depth: usize,
    value: &Value,
    is_expanded: bool,
) -> NodeDescriptor {
    let data_type = DataType::of(value);
    let child_count = match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 0,
    };

    NodeDescriptor {
        path,
        key,
        depth,
        data_type,
        is_array_element: false,
        array_index: None,
        has_children: child_count > 0,
        child_count,
        is_expanded: is_expanded && data_type.is_container(),
    }
}

/// Visible rows of `root`, collected.
#[instrument(skip_all, fields(expanded = expanded.len()))]
pub fn walk(
    root: &Value,
    expanded: &ExpansionSet,
    max_visible_depth: Option<usize>,
) -> Vec<NodeDescriptor> {
    TreeWalk::new(root, expanded)
        .max_depth(max_visible_depth)
        .map(|visible| visible.node)
        .collect()
}

/// Paths of every container below `root`, down to `depth` levels.
///
/// `Some(0)` and `Some(1)` both cover only the root's immediate children;
/// `None` covers the whole tree.
pub fn container_paths(root: &Value, depth: Option<usize>) -> Vec<Path> {
    let mut out = Vec::new();
    collect_containers(root, &Path::root(), 0, depth, &mut out);
    out
}

fn collect_containers(
    value: &Value,
    base: &Path,
    current: usize,
    max: Option<usize>,
    out: &mut Vec<Path>,
) {
    let children: Vec<(Segment, &Value)> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (Segment::Key(k.clone()), v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (Segment::Index(i), v))
            .collect(),
        _ => return,
    };

    for (seg, child) in children {
        if !DataType::of(child).is_container() {
            continue;
        }
        let path = base.child(seg);
        out.push(path.clone());
        if max.map_or(true, |max| current + 1 < max) {
            collect_containers(child, &path, current + 1, max, out);
        }
    }
}

/// Expand every container down to `depth` (see [`container_paths`]).
/// Existing entries are kept. Returns the number of newly expanded paths.
#[instrument(skip(root, expanded))]
pub fn expand_to_depth(root: &Value, expanded: &mut ExpansionSet, depth: Option<usize>) -> usize {
    let before = expanded.len();
    expanded.expand_all(container_paths(root, depth));
    expanded.len() - before
}
