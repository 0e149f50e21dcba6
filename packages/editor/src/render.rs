//! # Rendering Seam
//!
//! The editor never produces markup. A renderer receives each visible row
//! as a [`NodeDescriptor`] plus the value it describes, and returns
//! whatever text its host needs. Nothing a renderer does feeds back into
//! the expansion set or the value.

use crate::config::EditorConfig;
use crate::expansion::ExpansionSet;
use crate::walker::{NodeDescriptor, TreeWalk, VisibleNode};
use jsontree_common::Value;
use serde::Serialize;

/// Display options forwarded from the editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub editable: bool,
    pub show_type_indicators: bool,
    pub indent_pixels: u32,
}

impl From<&EditorConfig> for RenderOptions {
    fn from(config: &EditorConfig) -> Self {
        Self {
            editable: config.editable,
            show_type_indicators: config.show_type_indicators,
            indent_pixels: config.indent_pixels,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::from(&EditorConfig::default())
    }
}

/// Turns visible rows into markup.
pub trait NodeRenderer {
    /// Render one row
    fn render_node(
        &mut self,
        node: &NodeDescriptor,
        value: &Value,
        options: &RenderOptions,
    ) -> String;

    /// Rendered when the walk produces no rows at all
    fn render_empty(&mut self, _options: &RenderOptions) -> String {
        String::new()
    }
}

/// Walk `root` and concatenate the rendered rows.
pub fn render_tree<R: NodeRenderer + ?Sized>(
    root: &Value,
    expanded: &ExpansionSet,
    max_visible_depth: Option<usize>,
    options: &RenderOptions,
    renderer: &mut R,
) -> String {
    let rows = TreeWalk::new(root, expanded).max_depth(max_visible_depth);
    render_rows(rows, options, renderer)
}

/// Concatenate already-walked rows, falling back to the empty state.
pub fn render_rows<'a, I, R>(rows: I, options: &RenderOptions, renderer: &mut R) -> String
where
    I: IntoIterator<Item = VisibleNode<'a>>,
    R: NodeRenderer + ?Sized,
{
    let mut out = String::new();
    let mut rows_rendered = 0usize;

    for visible in rows {
        out.push_str(&renderer.render_node(&visible.node, visible.value, options));
        rows_rendered += 1;
    }

    if rows_rendered == 0 {
        return renderer.render_empty(options);
    }
    out
}
