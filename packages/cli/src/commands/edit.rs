use super::load_config;
use super::show::render_output;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use jsontree_editor::{Document, EditSession, Mutation, MutationOutcome, Pipeline};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// JSON file to edit
    pub file: PathBuf,

    /// JSON array of mutations to apply in order
    #[arg(short, long)]
    pub script: PathBuf,

    /// Save the edited document back to the file
    #[arg(short, long)]
    pub write: bool,

    /// Fail on the first mutation that does not apply
    #[arg(long)]
    pub strict: bool,

    /// Print node descriptors as JSON instead of a tree
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to jsontree.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Counts reported after a script run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EditSummary {
    pub applied: usize,
    pub skipped: usize,
}

pub fn edit(args: EditArgs, cwd: &Path) -> Result<()> {
    let config = load_config(args.config.as_deref(), cwd)?;

    let script = fs::read_to_string(&args.script)
        .with_context(|| format!("Cannot read script {}", args.script.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid mutation script {}", args.script.display()))?;

    let doc = Document::load(args.file.clone())?;
    let session = EditSession::new(args.file.display().to_string(), config);
    let mut pipeline = Pipeline::new(doc, session);

    let summary = run_script(&mut pipeline, &mutations, args.strict)?;
    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        version = pipeline.session().version(),
        "Script finished"
    );

    if !args.json {
        println!(
            "{} {} applied, {} skipped",
            "✓".green(),
            summary.applied,
            summary.skipped
        );
    }
    let (mut document, session) = pipeline.into_parts();
    print!("{}", render_output(&session, &document, args.json)?);

    if args.write && document.is_dirty() {
        document.save()?;
        if !args.json {
            println!("  {} Wrote {}", "✓".green(), args.file.display());
        }
    }

    Ok(())
}

pub(crate) fn run_script(
    pipeline: &mut Pipeline,
    mutations: &[Mutation],
    strict: bool,
) -> Result<EditSummary> {
    let mut summary = EditSummary::default();

    for (i, mutation) in mutations.iter().enumerate() {
        let result = pipeline.apply_mutation(mutation);
        if let MutationOutcome::Skipped(reason) = &result.outcome {
            if strict {
                return Err(anyhow::Error::new(reason.clone())
                    .context(format!("Mutation #{} ({})", i + 1, mutation.name())));
            }
            eprintln!("  {} #{} {}: {}", "skipped".yellow(), i + 1, mutation.name(), reason);
            summary.skipped += 1;
        } else {
            summary.applied += 1;
        }
    }

    Ok(summary)
}
