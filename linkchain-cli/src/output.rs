//! Report output for CLI commands.
//!
//! Table and JSON rendering come from the library reporters. CSV and TSV
//! are written here with the `csv` crate.

use std::io::Write;

use clap::ValueEnum;
use linkchain::{OutputFormat, Resolution};

use crate::error::CliError;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["start", "status", "resolved_target", "error_detail", "chain"];

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned table with chains indented under each link
    Table,
    /// JSON array of full records
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Write `results` to `out` in `format`.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[Resolution],
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Table => write_rendered(out, results, OutputFormat::Table),
        ReportFormat::Json => write_rendered(out, results, OutputFormat::Json),
        ReportFormat::Csv => write_delimited(out, results, b','),
        ReportFormat::Tsv => write_delimited(out, results, b'\t'),
    }
}

fn write_rendered<W: Write>(
    out: &mut W,
    results: &[Resolution],
    format: OutputFormat,
) -> Result<(), CliError> {
    let text = format.create_reporter().render(results)?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn write_delimited<W: Write>(
    out: &mut W,
    results: &[Resolution],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;

    for res in results {
        let chain = res
            .chain()
            .iter()
            .map(|hop| hop.path().display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        writer.write_record([
            res.start().display().to_string(),
            res.status().to_string(),
            res.resolved_target()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            res.error_detail().unwrap_or("").to_string(),
            chain,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
