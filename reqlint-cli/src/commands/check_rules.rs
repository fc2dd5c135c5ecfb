//! Check-rules command implementation

use anyhow::Result;
use clap::Args;
use reqlint_core::RuleTables;
use std::path::PathBuf;

/// Arguments for the check-rules command
#[derive(Debug, Args)]
pub struct CheckRulesArgs {
    /// Path to the rule configuration file to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl CheckRulesArgs {
    /// Execute the check-rules command
    pub fn execute(&self) -> Result<()> {
        println!("Checking rule configuration: {}", self.rules.display());

        match RuleTables::from_file(&self.rules) {
            Ok(tables) => {
                println!("✓ Rule configuration is valid!");
                println!("  Code: {}", tables.code());
                println!("  Name: {}", tables.name());
                println!("  Weak words: {}", tables.weak_words().len());
                println!(
                    "  Keywords: {} functional, {} non-functional",
                    tables.functional_keywords().len(),
                    tables.non_functional_keywords().len()
                );
                println!("  Metric indicators: {}", tables.metric_indicators().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Rule check failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_valid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", reqlint_core::rules::DEFAULT_RULES_TOML).unwrap();

        let args = CheckRulesArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_check_invalid_rules() {
        let toml_content = r#"
[metadata]
code = ""
name = "Test"

[weak_words]
terms = ["maybe"]

[keywords]
functional = ["shall"]
non_functional = ["latency"]

[metrics]
indicators = ["%"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = CheckRulesArgs {
            rules: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Rule set code is required"));
    }

    #[test]
    fn test_check_missing_file() {
        let args = CheckRulesArgs {
            rules: PathBuf::from("/nonexistent/rules.toml"),
        };
        assert!(args.execute().is_err());
    }
}
