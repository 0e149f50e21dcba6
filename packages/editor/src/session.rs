//! # Edit Session
//!
//! Holds everything one editor instance needs besides the value itself:
//! configuration, the expansion set, and a version counter. The value
//! stays with the host and is passed into every call.
//!
//! Mutating entry points never fail loudly. A stale path, a wrong container
//! kind or an out-of-range index produces [`MutationOutcome::Skipped`] and
//! leaves the value and the expansion set untouched.

use crate::config::EditorConfig;
use crate::expansion::ExpansionSet;
use crate::mutations::{self, Mutation, MutationError};
use crate::render::{render_rows, NodeRenderer, RenderOptions};
use crate::walker::{self, NodeDescriptor, TreeWalk};
use crate::EditorError;
use jsontree_common::{accessor, DataType, Path, Value};
use tracing::{debug, info};

/// Result of a mutating session call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Applied; the session is now at `version`
    Applied { version: u64 },

    /// Not applied; nothing changed
    Skipped(MutationError),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    /// For hosts that want to treat a skipped mutation as an error
    pub fn into_result(self) -> Result<u64, EditorError> {
        match self {
            MutationOutcome::Applied { version } => Ok(version),
            MutationOutcome::Skipped(reason) => Err(reason.into()),
        }
    }
}

/// One editor instance's view state
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Session identifier, for logs
    pub id: String,

    config: EditorConfig,

    expanded: ExpansionSet,

    /// Increments once per applied mutation
    version: u64,
}

impl EditSession {
    /// Create a session with an empty expansion set
    pub fn new(id: impl Into<String>, config: EditorConfig) -> Self {
        Self {
            id: id.into(),
            config,
            expanded: ExpansionSet::new(),
            version: 0,
        }
    }

    /// Expand to the configured initial depth
    pub fn initialize(&mut self, root: &Value) {
        let depth = self.config.initial_expand_depth;
        let added = walker::expand_to_depth(root, &mut self.expanded, depth);
        info!(session = %self.id, expanded = added, "Session initialized");
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expanded
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    // --- Expansion ---

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.is_expanded(path)
    }

    /// Flip a node between expanded and collapsed; returns the new state
    pub fn toggle(&mut self, path: &Path) -> bool {
        self.expanded.toggle(path.clone())
    }

    pub fn expand(&mut self, path: &Path) {
        self.expanded.expand(path.clone());
    }

    pub fn collapse(&mut self, path: &Path) {
        self.expanded.collapse(path);
    }

    /// Replace the expansion set with every container down to `depth`
    pub fn expand_to_depth(&mut self, root: &Value, depth: Option<usize>) {
        self.expanded.collapse_all();
        walker::expand_to_depth(root, &mut self.expanded, depth);
    }

    /// Expand every container, keeping current entries
    pub fn expand_all(&mut self, root: &Value) {
        self.expanded.expand_all(walker::container_paths(root, None));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.collapse_all();
    }

    // --- Structural mutations ---

    pub fn add_property(
        &mut self,
        root: &mut Value,
        parent_path: &Path,
        key: &str,
        value: Value,
    ) -> MutationOutcome {
        self.run("AddProperty", |expanded| {
            mutations::add_property(root, expanded, parent_path, key, value)
        })
    }

    pub fn remove_property(
        &mut self,
        root: &mut Value,
        parent_path: &Path,
        key: &str,
    ) -> MutationOutcome {
        self.run("RemoveProperty", |expanded| {
            mutations::remove_property(root, expanded, parent_path, key)
        })
    }

    pub fn add_element(
        &mut self,
        root: &mut Value,
        parent_path: &Path,
        value: Value,
    ) -> MutationOutcome {
        self.run("AddElement", |expanded| {
            mutations::add_element(root, expanded, parent_path, value)
        })
    }

    pub fn remove_element(
        &mut self,
        root: &mut Value,
        parent_path: &Path,
        index: i64,
    ) -> MutationOutcome {
        self.run("RemoveElement", |expanded| {
            mutations::remove_element(root, expanded, parent_path, index)
        })
    }

    pub fn remove_node(&mut self, root: &mut Value, path: &Path) -> MutationOutcome {
        self.run("RemoveNode", |expanded| mutations::remove_node(root, expanded, path))
    }

    pub fn move_element(
        &mut self,
        root: &mut Value,
        parent_path: &Path,
        from_index: i64,
        to_index: i64,
    ) -> MutationOutcome {
        self.run("MoveElement", |expanded| {
            mutations::move_element(root, expanded, parent_path, from_index, to_index)
        })
    }

    pub fn move_up(&mut self, root: &mut Value, parent_path: &Path, index: i64) -> MutationOutcome {
        self.run("MoveUp", |expanded| mutations::move_up(root, expanded, parent_path, index))
    }

    pub fn move_down(
        &mut self,
        root: &mut Value,
        parent_path: &Path,
        index: i64,
    ) -> MutationOutcome {
        self.run("MoveDown", |expanded| {
            mutations::move_down(root, expanded, parent_path, index)
        })
    }

    // --- Leaf edits ---

    pub fn get_value_at_path<'a>(&self, root: &'a Value, path: &Path) -> Option<&'a Value> {
        accessor::get(root, path)
    }

    pub fn set_value_at_path(
        &mut self,
        root: &mut Value,
        path: &Path,
        value: Value,
    ) -> MutationOutcome {
        self.run("SetValue", |expanded| {
            mutations::set_value(root, expanded, path, value)
        })
    }

    pub fn toggle_boolean(&mut self, root: &mut Value, path: &Path) -> MutationOutcome {
        self.run("ToggleBoolean", |expanded| mutations::toggle_boolean(root, expanded, path))
    }

    pub fn commit_edit(
        &mut self,
        root: &mut Value,
        path: &Path,
        data_type: DataType,
        text: &str,
    ) -> MutationOutcome {
        self.run("CommitEdit", |expanded| {
            mutations::commit_edit(root, expanded, path, data_type, text)
        })
    }

    /// Apply a described mutation
    pub fn apply(&mut self, root: &mut Value, mutation: &Mutation) -> MutationOutcome {
        self.run(mutation.name(), |expanded| mutation.apply(root, expanded))
    }

    // --- Output ---

    /// Visible rows for the current expansion state
    pub fn walk(&self, root: &Value) -> Vec<NodeDescriptor> {
        walker::walk(root, &self.expanded, self.config.max_visible_depth)
    }

    /// Lazy variant of [`walk`](Self::walk) that also yields each row's value
    pub fn visible<'a>(&'a self, root: &'a Value) -> TreeWalk<'a> {
        TreeWalk::new(root, &self.expanded).max_depth(self.config.max_visible_depth)
    }

    pub fn render<R: NodeRenderer + ?Sized>(&self, root: &Value, renderer: &mut R) -> String {
        let options = RenderOptions::from(&self.config);
        render_rows(self.visible(root), &options, renderer)
    }

    fn run<F>(&mut self, name: &'static str, op: F) -> MutationOutcome
    where
        F: FnOnce(&mut ExpansionSet) -> Result<(), MutationError>,
    {
        let result = if self.config.editable {
            op(&mut self.expanded)
        } else {
            Err(MutationError::ReadOnly)
        };

        match result {
            Ok(()) => {
                self.version += 1;
                debug!(
                    session = %self.id,
                    mutation = name,
                    version = self.version,
                    "Mutation applied"
                );
                MutationOutcome::Applied { version: self.version }
            }
            Err(reason) => {
                debug!(session = %self.id, mutation = name, %reason, "Mutation skipped");
                MutationOutcome::Skipped(reason)
            }
        }
    }
}
