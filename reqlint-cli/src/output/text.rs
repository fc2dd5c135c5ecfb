//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use reqlint_core::{Finding, ValidationReport};
use std::io::{self, Write};

/// Plain text formatter - a verdict line per requirement, then its findings
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_finding(&mut self, label: &str, finding: &Finding) -> Result<()> {
        writeln!(
            self.writer,
            "  {label} {}: {}",
            finding.finding_type, finding.description
        )?;
        writeln!(self.writer, "    -> {}", finding.advice)?;
        Ok(())
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, origin: &str, report: &ValidationReport) -> Result<()> {
        let verdict = if report.is_valid() { "VALID" } else { "INVALID" };
        writeln!(
            self.writer,
            "[{origin}] {verdict}: {}",
            report.original_text().trim()
        )?;
        for finding in report.errors() {
            self.write_finding("error:", finding)?;
        }
        for finding in report.suggestions() {
            self.write_finding("suggestion:", finding)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::reports;

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            for (i, report) in reports().iter().enumerate() {
                formatter
                    .format_report(&format!("arg:{}", i + 1), report)
                    .unwrap();
            }
            formatter.finish().unwrap();
        }

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("[arg:1] VALID: El sistema debe calcular"));
        assert!(out.contains("  suggestion: Measurability: No specific metrics were detected."));
        assert!(out.contains("[arg:2] INVALID: algo rapido"));
        assert!(out.contains("  error: Insufficient Length:"));
        assert!(out.contains("  error: Ambiguity: Ambiguous words found: algo"));
    }
}
