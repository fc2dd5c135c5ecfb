//! Status command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use reqlint_core::ServiceStatus;
use std::path::PathBuf;

use super::{build_validator, init_logging};

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Rule configuration file (default: built-in Spanish rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Lexicon enabling the specificity check
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: StatusFormat,
}

/// Output formats for the status report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFormat {
    /// Human-readable lines
    Text,
    /// JSON object
    Json,
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self) -> Result<()> {
        init_logging(0, false);
        let validator = build_validator(self.rules.as_deref(), self.lexicon.as_deref())?;
        println!("{}", render(&validator.status(), self.format)?);
        Ok(())
    }
}

/// Render a status report
pub fn render(status: &ServiceStatus, format: StatusFormat) -> Result<String> {
    Ok(match format {
        StatusFormat::Json => serde_json::to_string_pretty(status)?,
        StatusFormat::Text => format!(
            "{} {}\n  Status: {}\n  Rules: {}\n  Tagger: {}",
            status.name,
            status.version,
            status.status,
            status.language,
            status
                .tagger
                .as_deref()
                .unwrap_or("none (specificity check disabled)")
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqlint_core::Validator;

    #[test]
    fn test_text_status_degraded() {
        let status = Validator::new().unwrap().status();
        let out = render(&status, StatusFormat::Text).unwrap();
        assert!(out.starts_with("Requirement Validator "));
        assert!(out.contains("Status: online"));
        assert!(out.contains("Tagger: none (specificity check disabled)"));
    }

    #[test]
    fn test_json_status() {
        let status = Validator::new().unwrap().status();
        let out = render(&status, StatusFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], "online");
        assert_eq!(value["language"], "es");
        assert!(value["tagger"].is_null());
    }
}
