//! Process command - extract fields from a single judgment document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use verdex_core::{CaseRecord, JudgmentProfile};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (plain JSON or .b64 blob)
    #[arg(required = true)]
    input: PathBuf,

    /// Document id for the output record (default: numeric file stem)
    #[arg(long)]
    id: Option<u64>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (header plus one row)
    Csv,
    /// Plain text column listing
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let doc = super::read_document(&args.input)?;
    let id = args.id.unwrap_or_else(|| super::document_id(&args.input));
    let record = JudgmentProfile::new(id, doc, config).record();

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    info!("Processed in {:.2?}", start.elapsed());
    Ok(())
}

pub fn format_record(record: &CaseRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&record.to_json())?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(CaseRecord::COLUMNS)?;
            writer.write_record(record.row())?;
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (column, value) in CaseRecord::COLUMNS.iter().zip(record.row()) {
                out.push_str(&format!("{:<32} {}\n", column, value));
            }
            Ok(out)
        }
    }
}
