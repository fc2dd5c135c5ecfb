//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use reqlint_core::rules::DEFAULT_RULES_TOML;
use reqlint_core::RuleConfig;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Rule set code for the new configuration
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Rule set display name
    #[arg(long, value_name = "NAME", default_value = "Custom Rules")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating rule configuration template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the term lists to fit your requirement style");
        println!("2. Check your configuration:");
        println!("   reqlint check-rules --rules {}", self.output.display());
        println!("3. Use it for validation:");
        println!(
            "   reqlint validate -i requirements.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template prefilled with the built-in tables
    fn generate_template(&self) -> Result<String> {
        let mut config = RuleConfig::from_toml(DEFAULT_RULES_TOML)
            .context("Built-in rule configuration is malformed")?;
        config.metadata.code = self.code.clone();
        config.metadata.name = self.name.clone();

        let body = toml::to_string_pretty(&config)?;
        Ok(format!(
            "# Rule configuration for {}\n\
             #\n\
             # weak_words.terms        hedging terms reported as ambiguity\n\
             # keywords.functional     terms expected in functional requirements\n\
             # keywords.non_functional terms expected in non-functional requirements\n\
             # metrics.indicators      phrases marking measurable criteria\n\
             #\n\
             # Matching ignores case and accents.\n\n{body}",
            self.name
        ))
    }
}
