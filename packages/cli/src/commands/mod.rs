pub mod edit;
pub mod init;
pub mod show;

pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use show::{show, ShowArgs};

use anyhow::Result;
use jsontree_editor::EditorConfig;
use std::path::Path;

/// Config from `--config`, else `jsontree.config.json` in `cwd`, else defaults
pub(crate) fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<EditorConfig> {
    let config = match explicit {
        Some(path) => EditorConfig::from_file(path)?,
        None => EditorConfig::load(cwd)?,
    };
    Ok(config)
}
