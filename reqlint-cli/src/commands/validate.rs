//! Validate command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use reqlint_core::{ValidationReport, Validator};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, Requirement, STDIN_MARKER};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

use super::{build_validator, init_logging};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Requirement text (repeatable)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Files or patterns with one requirement per line (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Treat requirements as functional
    #[arg(long, conflicts_with = "non_functional")]
    pub functional: bool,

    /// Treat requirements as non-functional
    #[arg(short, long)]
    pub non_functional: bool,

    /// Output format (default from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rule configuration file (default: built-in Spanish rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Lexicon enabling the specificity check
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validate in parallel regardless of batch size
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel validation
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Exit with status 1 if any requirement is invalid
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Verdict line per requirement followed by its findings
    Text,
    /// JSON array of reports
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<ExitCode> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        let is_functional = self.resolve_functional(&config);

        let rules = self.rules.as_ref().or(config.validation.rules_path.as_ref());
        let lexicon = self
            .lexicon
            .as_ref()
            .or(config.validation.lexicon_path.as_ref());
        let validator = build_validator(rules.map(PathBuf::as_path), lexicon.map(PathBuf::as_path))?;

        let requirements = self.collect_requirements()?;
        log::info!(
            "Validating {} requirement(s) as {}",
            requirements.len(),
            if is_functional { "functional" } else { "non-functional" }
        );

        let reports = self.run(&validator, &requirements, is_functional, &config)?;

        let mut formatter = self.formatter(format, config.output.pretty_json)?;
        for (requirement, report) in requirements.iter().zip(&reports) {
            formatter.format_report(&requirement.origin, report)?;
        }
        formatter.finish()?;

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        log::info!("{} of {} requirement(s) invalid", invalid, reports.len());

        if self.strict && invalid > 0 {
            Ok(ExitCode::from(1))
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
                .into()
            }),
        }
    }

    fn resolve_functional(&self, config: &CliConfig) -> bool {
        if self.functional {
            true
        } else if self.non_functional {
            false
        } else {
            config.validation.functional_by_default
        }
    }

    /// Gather requirements from inline text, files and stdin, in that order
    pub fn collect_requirements(&self) -> Result<Vec<Requirement>> {
        let mut requirements: Vec<Requirement> = self
            .text
            .iter()
            .enumerate()
            .map(|(i, text)| Requirement::new(format!("arg:{}", i + 1), text.as_str()))
            .collect();

        let (stdin, patterns): (Vec<&String>, Vec<&String>) =
            self.input.iter().partition(|p| p.as_str() == STDIN_MARKER);

        if !patterns.is_empty() {
            let patterns: Vec<String> = patterns.into_iter().cloned().collect();
            let files = resolve_patterns(&patterns)?;

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);
            for file in &files {
                requirements.extend(FileReader::read_requirements(file)?);
                progress.file_completed(&file.display().to_string());
            }
            progress.finish();
        }

        if !stdin.is_empty() {
            requirements.extend(FileReader::read_stdin()?);
        }

        if requirements.is_empty() {
            return Err(CliError::NoInput.into());
        }
        Ok(requirements)
    }

    fn run(
        &self,
        validator: &Validator,
        requirements: &[Requirement],
        is_functional: bool,
        config: &CliConfig,
    ) -> Result<Vec<ValidationReport>> {
        let parallel = self.parallel || requirements.len() > config.performance.parallel_threshold;

        let result = if parallel {
            let threads = self
                .threads
                .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
                .unwrap_or_else(num_cpus::get);
            log::debug!("Validating in parallel with {threads} thread(s)");

            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| {
                requirements
                    .par_iter()
                    .map(|r| validator.validate(&r.text, is_functional))
                    .collect::<Result<Vec<_>, _>>()
            })
        } else {
            requirements
                .iter()
                .map(|r| validator.validate(&r.text, is_functional))
                .collect::<Result<Vec<_>, _>>()
        };

        result.map_err(|e| CliError::ValidationFault(e.to_string()).into())
    }

    fn formatter(&self, format: OutputFormat, pretty: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(File::create(path).map_err(|e| {
                anyhow::anyhow!("Failed to create output file {}: {e}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ValidateArgs,
    }

    fn parse(argv: &[&str]) -> ValidateArgs {
        let mut full = vec!["reqlint"];
        full.extend_from_slice(argv);
        TestCli::parse_from(full).args
    }

    #[test]
    fn test_collect_inline_text() {
        let args = parse(&["-t", "uno", "-t", "dos"]);
        let reqs = args.collect_requirements().unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0], Requirement::new("arg:1", "uno"));
        assert_eq!(reqs[1].origin, "arg:2");
    }

    #[test]
    fn test_collect_from_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "primero\n\nsegundo\n").unwrap();
        let pattern = format!("{}/*.txt", dir.path().display());

        let args = parse(&["-q", "-t", "inline", "-i", pattern.as_str()]);
        let reqs = args.collect_requirements().unwrap();
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[0].text, "inline");
        assert!(reqs[2].origin.ends_with("a.txt:3"));
    }

    #[test]
    fn test_collect_nothing_is_an_error() {
        let args = parse(&[]);
        let err = args.collect_requirements().unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_functional_resolution() {
        let mut config = CliConfig::default();
        assert!(parse(&[]).resolve_functional(&config));
        assert!(!parse(&["-n"]).resolve_functional(&config));

        config.validation.functional_by_default = false;
        assert!(!parse(&[]).resolve_functional(&config));
        assert!(parse(&["--functional"]).resolve_functional(&config));
    }

    #[test]
    fn test_format_resolution() {
        let mut config = CliConfig::default();
        assert_eq!(parse(&[]).resolve_format(&config).unwrap(), OutputFormat::Text);
        assert_eq!(
            parse(&["-f", "json"]).resolve_format(&config).unwrap(),
            OutputFormat::Json
        );

        config.output.default_format = "Markdown".to_string();
        assert_eq!(
            parse(&[]).resolve_format(&config).unwrap(),
            OutputFormat::Markdown
        );

        config.output.default_format = "yaml".to_string();
        assert!(parse(&[]).resolve_format(&config).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let validator = Validator::new().unwrap();
        let config = CliConfig::default();
        let requirements: Vec<Requirement> = (0..50)
            .map(|i| {
                let text = if i % 2 == 0 {
                    "El sistema debe registrar usuarios"
                } else {
                    "algo rapido"
                };
                Requirement::new(format!("arg:{i}"), text)
            })
            .collect();

        let sequential = parse(&[])
            .run(&validator, &requirements, true, &config)
            .unwrap();
        let parallel = parse(&["-p", "--threads", "4"])
            .run(&validator, &requirements, true, &config)
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
