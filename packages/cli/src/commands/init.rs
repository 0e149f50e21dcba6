use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jsontree_editor::{EditorConfig, DEFAULT_CONFIG_NAME};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Levels expanded when a document is opened
    #[arg(short, long, default_value_t = 1)]
    pub depth: usize,

    /// Create a read-only (inspector) configuration
    #[arg(long)]
    pub read_only: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = EditorConfig {
        initial_expand_depth: Some(args.depth),
        editable: !args.read_only,
        ..EditorConfig::default()
    };

    let mut content = serde_json::to_string_pretty(&config)?;
    content.push('\n');
    fs::write(&config_path, content)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}
