use super::load_config;
use crate::text_renderer::TextRenderer;
use anyhow::Result;
use clap::Args;
use jsontree_editor::{Document, EditSession};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// JSON file to display
    pub file: PathBuf,

    /// Expand containers down to this depth (overrides config)
    #[arg(short, long, conflicts_with = "all")]
    pub depth: Option<usize>,

    /// Expand every container
    #[arg(short, long)]
    pub all: bool,

    /// Deepest row to print
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print node descriptors as JSON instead of a tree
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to jsontree.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn show(args: ShowArgs, cwd: &Path) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), cwd)?;
    if args.max_depth.is_some() {
        config.max_visible_depth = args.max_depth;
    }

    let doc = Document::load(args.file.clone())?;
    let mut session = EditSession::new(args.file.display().to_string(), config);
    session.initialize(doc.value());

    if args.all {
        session.expand_all(doc.value());
    } else if let Some(depth) = args.depth {
        session.expand_to_depth(doc.value(), Some(depth));
    }

    print!("{}", render_output(&session, &doc, args.json)?);
    Ok(())
}

pub(crate) fn render_output(session: &EditSession, doc: &Document, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&session.walk(doc.value()))?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(session.render(doc.value(), &mut TextRenderer))
    }
}
