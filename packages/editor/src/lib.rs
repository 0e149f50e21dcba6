//! # JsonTree Editor
//!
//! Path-addressed editing core for a collapsible JSON tree view.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ common: paths, get/set by path, data types  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session state + mutations           │
//! │  - Expansion set keyed by path              │
//! │  - Add/remove/move with path renumbering    │
//! │  - Tree walk producing visible rows         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host renderer: rows → markup                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Paths are the only handle**: nodes have no identity beyond position
//! 2. **Renumber before splicing**: expansion bookkeeping uses pre-mutation indices
//! 3. **Fail soft**: a stale path is a no-op, never a crash
//! 4. **No ambient state**: everything lives in an explicit session
//!
//! ## Usage
//!
//! ```rust
//! use jsontree_editor::{EditSession, EditorConfig};
//! use jsontree_common::Path;
//! use serde_json::json;
//!
//! let mut data = json!({ "items": ["a", "b", "c"] });
//! let mut session = EditSession::new("main", EditorConfig::default());
//! session.initialize(&data);
//!
//! session.move_element(&mut data, &Path::parse("items"), 0, 2);
//! assert_eq!(data, json!({ "items": ["b", "c", "a"] }));
//!
//! let rows = session.walk(&data);
//! assert_eq!(rows[0].path.to_string(), "items");
//! assert_eq!(rows.len(), 4);
//! ```

mod config;
mod document;
mod errors;
mod expansion;
pub mod mutations;
mod pipeline;
mod render;
mod session;
mod walker;

pub use config::{EditorConfig, DEFAULT_CONFIG_NAME};
pub use document::Document;
pub use errors::EditorError;
pub use expansion::ExpansionSet;
pub use mutations::{Mutation, MutationError};
pub use pipeline::{Pipeline, PipelineResult};
pub use render::{render_rows, render_tree, NodeRenderer, RenderOptions};
pub use session::{EditSession, MutationOutcome};
pub use walker::{
    container_paths, expand_to_depth, walk, NodeDescriptor, TreeWalk, VisibleNode, ROOT_KEY,
};

// Re-export common types for convenience
pub use jsontree_common::{DataType, Path, Segment, Value};
