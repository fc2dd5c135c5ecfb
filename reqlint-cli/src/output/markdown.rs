//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use reqlint_core::ValidationReport;
use std::io::Write;

/// Markdown formatter - one section per requirement
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    total: usize,
    valid: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total: 0,
            valid: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, origin: &str, report: &ValidationReport) -> Result<()> {
        self.total += 1;
        if report.is_valid() {
            self.valid += 1;
        }

        let verdict = if report.is_valid() { "valid" } else { "invalid" };
        writeln!(self.writer, "## {}. `{origin}` ({verdict})", self.total)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.original_text().trim())?;
        writeln!(self.writer)?;
        for finding in report.errors().iter().chain(report.suggestions()) {
            writeln!(
                self.writer,
                "- **{}** ({:?}): {} *{}*",
                finding.finding_type, finding.kind, finding.description, finding.advice
            )?;
        }
        if !report.errors().is_empty() || !report.suggestions().is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total requirements: {}, valid: {}*",
            self.total, self.valid
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
