//! Plain-text tree rendering for the terminal

use colored::Colorize;
use jsontree_editor::{DataType, NodeDescriptor, NodeRenderer, RenderOptions, Value};

/// Renders one line per visible row, indented by depth
#[derive(Debug, Default)]
pub struct TextRenderer;

impl NodeRenderer for TextRenderer {
    fn render_node(
        &mut self,
        node: &NodeDescriptor,
        value: &Value,
        options: &RenderOptions,
    ) -> String {
        // Ten pixels per terminal column, at least one column per level
        let step = (options.indent_pixels as usize / 10).max(1);
        let indent = " ".repeat(node.depth * step);

        let marker = match (node.data_type.is_container(), node.is_expanded) {
            (true, true) => "▾ ",
            (true, false) => "▸ ",
            (false, _) => "  ",
        };

        let key = if node.is_array_element {
            format!("[{}]", node.key)
        } else {
            node.key.clone()
        };

        let mut line = format!("{}{}{}: {}", indent, marker, key.cyan(), summary(node, value));
        if options.show_type_indicators {
            line.push_str(&format!(" {}", node.data_type.as_str().dimmed()));
        }
        line.push('\n');
        line
    }

    fn render_empty(&mut self, _options: &RenderOptions) -> String {
        format!("{}\n", "(empty)".dimmed())
    }
}

fn summary(node: &NodeDescriptor, value: &Value) -> String {
    match node.data_type {
        DataType::Object => format!("{{{}}}", node.child_count),
        DataType::Array => format!("[{}]", node.child_count),
        DataType::String => value.to_string().green().to_string(),
        DataType::Number | DataType::Boolean => value.to_string().yellow().to_string(),
        DataType::Null => "null".dimmed().to_string(),
    }
}
