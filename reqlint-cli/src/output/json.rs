//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use reqlint_core::{ValidationReport, ValidationReportDto};
use std::io::Write;

/// JSON formatter - outputs reports as a JSON array in wire shape
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<ValidationReportDto>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, _origin: &str, report: &ValidationReport) -> Result<()> {
        self.reports.push(ValidationReportDto::from(report));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
