//! Export command - flatten a collection of judgment documents to CSV.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use verdex_core::{CaseRecord, JudgmentProfile};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Input directory or glob pattern of .json/.b64 documents
    #[arg(required = true)]
    input: String,

    /// Output CSV path
    #[arg(short, long, default_value = "records.csv")]
    output: PathBuf,

    /// Keep only first-instance corruption judgments
    #[arg(long)]
    corruption_only: bool,

    /// Export at most this many documents
    #[arg(long)]
    limit: Option<usize>,

    /// Abort on the first unreadable document instead of skipping it
    #[arg(long)]
    fail_fast: bool,
}

pub fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    // A directory argument means every document file inside it.
    let pattern = if PathBuf::from(&args.input).is_dir() {
        format!("{}/*", args.input.trim_end_matches('/'))
    } else {
        args.input.clone()
    };

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext, "json" | "b64")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching documents found for: {}", args.input);
    }
    if let Some(limit) = args.limit {
        files.truncate(limit);
    }

    println!(
        "{} Found {} documents to export",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut writer = csv::Writer::from_path(&args.output)?;
    writer.write_record(CaseRecord::COLUMNS)?;

    let mut exported = 0usize;
    let mut filtered = 0usize;
    let mut failed: Vec<PathBuf> = Vec::new();

    for path in &files {
        match super::read_document(path) {
            Ok(doc) => {
                let id = super::document_id(path);
                let profile = JudgmentProfile::new(id, doc, config.clone());
                if args.corruption_only
                    && !(profile.is_corruption() && profile.is_first_instance())
                {
                    debug!(path = %path.display(), "filtered out");
                    filtered += 1;
                } else {
                    writer.write_record(profile.record().row())?;
                    exported += 1;
                }
            }
            Err(e) => {
                // A bad document never takes the run down unless asked to.
                if args.fail_fast {
                    pb.abandon();
                    return Err(e.context(format!("failed to read {}", path.display())));
                }
                warn!("Skipping {}: {}", path.display(), e);
                failed.push(path.clone());
            }
        }
        pb.inc(1);
    }

    writer.flush()?;
    pb.finish_with_message("Complete");

    println!(
        "{} Exported {} records to {} in {:.2?}",
        style("✓").green(),
        exported,
        args.output.display(),
        start.elapsed()
    );
    if filtered > 0 {
        println!("{} Filtered out {} documents", style("ℹ").blue(), filtered);
    }
    if !failed.is_empty() {
        println!("{} Skipped {} unreadable documents:", style("!").yellow(), failed.len());
        for path in &failed {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}
