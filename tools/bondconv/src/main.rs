//! CLI tool for converting fixed-layout bond-record attachments into
//! delimited CSV-like output.
//!
//! # Usage
//!
//! ```bash
//! # Convert the default attachment in the working directory
//! bondconv
//!
//! # Explicit paths
//! bondconv --input Attachment_B.txt --output bonds.csv
//!
//! # Pipeline parameters from a JSON config, with a CLI override
//! bondconv --config pipeline.json --max-address-length 80
//! ```
//!
//! The conversion is all-or-nothing: the output file is only created
//! after the whole transform has succeeded, so a malformed record
//! never leaves a partial result behind.

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use bondrec::prelude::*;
use clap::Parser;
use tracing::info;

/// Convert a fixed-layout bond-record text file into delimited output.
///
/// Keeps only lines that look like bond entries (recognized prefix or
/// leading number), pairs identifier lines with their address
/// continuations and re-delimits the bond and address sections.
#[derive(Parser, Debug)]
#[command(name = "bondconv")]
#[command(version, about)]
struct Args {
    /// Input attachment path.
    #[arg(short, long, default_value = "Attachment_A.txt")]
    input: PathBuf,

    /// Output file path (created/truncated on success).
    #[arg(short, long, default_value = "new.csv")]
    output: PathBuf,

    /// JSON file with pipeline parameters; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bond-number prefix (repeatable); replaces the configured set.
    #[arg(long = "prefix")]
    prefixes: Vec<String>,

    /// Number of leading tokens held by the bond identifier.
    #[arg(long)]
    bond_field_offset: Option<usize>,

    /// Maximum length of an address continuation line when pairing.
    #[arg(long)]
    max_address_length: Option<usize>,
}

impl Args {
    /// Resolves the effective pipeline config: file config (or defaults)
    /// with CLI overrides applied on top.
    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if !self.prefixes.is_empty() {
            config.bond_prefixes = self.prefixes.clone();
        }
        if let Some(offset) = self.bond_field_offset {
            config.bond_field_offset = offset;
        }
        if let Some(len) = self.max_address_length {
            config.max_address_length = len;
        }

        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = args.pipeline_config()?;

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open input file: {}", args.input.display()))?;
    let lines = read_lines(input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    info!(count = lines.len(), "read input lines");

    // Transform fully before touching the output path
    let records = convert_lines(&lines, &config).context("Conversion failed")?;

    let output = File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
    let mut writer = LineWriter::new(output);
    writer.write_all(&records).context("Failed to write output")?;
    writer.flush().context("Failed to flush output")?;
    info!(count = writer.records_written(), "wrote output records");

    // Report result to stderr (so it doesn't interfere with stdout output)
    eprintln!("Converted {} record(s)", writer.records_written());

    Ok(())
}
