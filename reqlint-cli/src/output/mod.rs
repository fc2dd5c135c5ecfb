//! Output formatting module

use anyhow::Result;
use reqlint_core::ValidationReport;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single validation report
    fn format_report(&mut self, origin: &str, report: &ValidationReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
