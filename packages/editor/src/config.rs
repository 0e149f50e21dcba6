use crate::EditorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "jsontree.config.json";

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Container levels expanded when a session is initialized (`null` = all)
    #[serde(default = "default_initial_expand_depth")]
    pub initial_expand_depth: Option<usize>,

    /// `false` turns the editor into a read-only inspector
    #[serde(default = "default_true")]
    pub editable: bool,

    /// Show type badges next to values
    #[serde(default = "default_true")]
    pub show_type_indicators: bool,

    /// Indentation per depth level
    #[serde(default = "default_indent_pixels")]
    pub indent_pixels: u32,

    /// Deepest row produced by a walk (`null` = unlimited)
    #[serde(default)]
    pub max_visible_depth: Option<usize>,
}

fn default_initial_expand_depth() -> Option<usize> {
    Some(1)
}

fn default_true() -> bool {
    true
}

fn default_indent_pixels() -> u32 {
    20
}

impl EditorConfig {
    /// Load `jsontree.config.json` from a directory, or defaults if absent
    pub fn load(dir: &Path) -> Result<Self, EditorError> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit file
    pub fn from_file(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_expand_depth: default_initial_expand_depth(),
            editable: true,
            show_type_indicators: true,
            indent_pixels: default_indent_pixels(),
            max_visible_depth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "initialExpandDepth": 3,
            "editable": false,
            "indentPixels": 12,
            "maxVisibleDepth": 5
        }"#;

        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.initial_expand_depth, Some(3));
        assert!(!config.editable);
        assert!(config.show_type_indicators);
        assert_eq!(config.indent_pixels, 12);
        assert_eq!(config.max_visible_depth, Some(5));
    }

    #[test]
    fn test_null_expand_depth_means_unlimited() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "initialExpandDepth": null }"#).unwrap();
        assert_eq!(config.initial_expand_depth, None);
    }

    #[test]
    fn test_default_config() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.initial_expand_depth, Some(1));
        assert_eq!(config.indent_pixels, 20);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(EditorConfig::load(dir.path()).unwrap(), EditorConfig::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "editable": false }"#).unwrap();
        assert!(!EditorConfig::load(dir.path()).unwrap().editable);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(EditorConfig::from_file(&path), Err(EditorError::Json(_))));
    }
}
