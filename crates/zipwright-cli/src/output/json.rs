//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::cell::RefCell;
use std::io::Write;
use std::io::{self};
use zipwright_core::ZipReport;

/// Writes exactly one JSON document per run to stdout.
///
/// Warnings raised before the result are held back and embedded in it.
#[derive(Default)]
pub struct JsonFormatter {
    warnings: RefCell<Vec<String>>,
}

#[derive(Serialize)]
struct EntryOutput {
    name: String,
    mode: u32,
    size: u64,
}

#[derive(Serialize)]
struct AssemblyOutput {
    destination: String,
    files_added: usize,
    files_skipped: usize,
    collisions: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    duration_ms: u128,
    entries: Vec<EntryOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl From<&ZipReport> for AssemblyOutput {
    fn from(report: &ZipReport) -> Self {
        Self {
            destination: report.destination.display().to_string(),
            files_added: report.files_added(),
            files_skipped: report.files_skipped,
            collisions: report.collisions,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            duration_ms: report.duration.as_millis(),
            entries: report
                .entries
                .iter()
                .map(|e| EntryOutput {
                    name: e.name.clone(),
                    mode: e.mode,
                    size: e.size,
                })
                .collect(),
            warnings: Vec::new(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_assembly_result(&self, report: &ZipReport) -> Result<()> {
        let mut data = AssemblyOutput::from(report);
        data.warnings = self.warnings.take();

        let output = if data.warnings.is_empty() {
            JsonOutput::success("zip", data)
        } else {
            JsonOutput::warning("zip", data)
        };
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("zip", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
