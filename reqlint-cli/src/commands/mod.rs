//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use reqlint_core::{default_tables, RuleTables, Term, Validator};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use crate::lexicon;

pub mod check_rules;
pub mod generate_config;
pub mod status;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate requirement statements
    Validate(validate::ValidateArgs),

    /// Check a rule configuration file
    CheckRules(check_rules::CheckRulesArgs),

    /// Generate a rule configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Report validator identity and tagger availability
    Status(status::StatusArgs),

    /// List the active rule tables
    List {
        #[command(subcommand)]
        subcommand: ListCommands,

        #[command(flatten)]
        rules: RulesArg,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List ambiguity markers
    WeakWords,

    /// List characteristic keywords of both requirement classes
    Keywords,

    /// List metric indicators
    Metrics,
}

/// Optional external rule tables
#[derive(Debug, Args)]
pub struct RulesArg {
    /// Rule configuration file (default: built-in Spanish rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<ExitCode> {
        match self {
            Commands::Validate(args) => args.execute(),
            Commands::CheckRules(args) => args.execute().map(|_| ExitCode::SUCCESS),
            Commands::GenerateConfig(args) => args.execute().map(|_| ExitCode::SUCCESS),
            Commands::Status(args) => args.execute().map(|_| ExitCode::SUCCESS),
            Commands::List { subcommand, rules } => {
                let tables = load_tables(rules.rules.as_deref())?;
                print!("{}", list_terms(&tables, *subcommand));
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // a logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Load external rule tables or fall back to the built-in ones
pub fn load_tables(path: Option<&Path>) -> Result<Arc<RuleTables>> {
    match path {
        Some(path) => {
            let tables = RuleTables::from_file(path)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?;
            Ok(Arc::new(tables))
        }
        None => Ok(default_tables()?),
    }
}

/// Build the process-wide validator once
pub fn build_validator(rules: Option<&Path>, lexicon: Option<&Path>) -> Result<Validator> {
    let tables = load_tables(rules)?;
    let validator = Validator::builder()
        .tables(tables)
        .maybe_tagger(lexicon::acquire(lexicon))
        .build()?;
    Ok(validator)
}

fn join_terms(terms: &[Term]) -> String {
    terms
        .iter()
        .map(|t| format!("  {}\n", t.display()))
        .collect()
}

/// Render one of the active tables
pub fn list_terms(tables: &RuleTables, which: ListCommands) -> String {
    match which {
        ListCommands::WeakWords => {
            format!("Weak words ({}):\n{}", tables.code(), join_terms(tables.weak_words()))
        }
        ListCommands::Keywords => format!(
            "Functional keywords ({code}):\n{}Non-functional keywords ({code}):\n{}",
            join_terms(tables.functional_keywords()),
            join_terms(tables.non_functional_keywords()),
            code = tables.code()
        ),
        ListCommands::Metrics => format!(
            "Metric indicators ({}):\n{}",
            tables.code(),
            join_terms(tables.metric_indicators())
        ),
    }
}
