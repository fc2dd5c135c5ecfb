//! The requirement validation pipeline
//!
//! Checks run in a fixed order and never short-circuit each other:
//!
//! 1. length
//! 2. ambiguity (weak words)
//! 3. characteristic keywords for the requirement class
//! 4. specificity (verbs and nouns, only when a tagger is configured)
//! 5. measurability (functional requirements only, suggestion)

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::normalize::{normalize, word_count};
use crate::report::{Finding, FindingType, ReportBuilder, ValidationReport};
use crate::rules::{default_tables, RuleTables, Term};
use crate::status::ServiceStatus;
use crate::tagger::{PosTagger, TagCounts};

/// Minimum number of words for a meaningful requirement
pub const MIN_WORDS: usize = 5;

/// Minimum number of nouns for a specific requirement
pub const MIN_NOUNS: usize = 2;

/// Number of example keywords listed when none is found
const KEYWORD_EXAMPLES: usize = 3;

/// Requirement validator
///
/// Holds only immutable, shared state; cloning is cheap and a single
/// instance can serve concurrent calls.
#[derive(Clone)]
pub struct Validator {
    tables: Arc<RuleTables>,
    tagger: Option<Arc<dyn PosTagger>>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("tables", &self.tables.code())
            .field("tagger", &self.tagger.as_ref().map(|t| t.name()))
            .finish()
    }
}

impl Validator {
    /// Validator with the built-in tables and no tagger
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a validator
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Active rule tables
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Whether the specificity check runs
    pub fn has_tagger(&self) -> bool {
        self.tagger.is_some()
    }

    /// Liveness and identity report
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus::online(
            self.tables.code(),
            self.tagger.as_ref().map(|t| t.name()),
        )
    }

    /// Validate one requirement
    ///
    /// Findings are returned inside the report. The only error is a failure
    /// of the configured tagger during this call.
    pub fn validate(&self, requirement: &str, is_functional: bool) -> Result<ValidationReport> {
        let normalized = normalize(requirement);
        let mut report = ReportBuilder::new(requirement);

        self.check_length(requirement, &mut report);
        self.check_ambiguity(&normalized, &mut report);
        self.check_keywords(&normalized, is_functional, &mut report);
        self.check_specificity(requirement, &mut report)?;
        if is_functional {
            self.check_measurability(&normalized, &mut report);
        }

        let report = report.finish();
        log::debug!(
            "Validated requirement ({} errors, {} suggestions)",
            report.errors().len(),
            report.suggestions().len()
        );
        Ok(report)
    }

    /// Validate several requirements of the same class, in order
    pub fn validate_batch<S: AsRef<str>>(
        &self,
        requirements: &[S],
        is_functional: bool,
    ) -> Result<Vec<ValidationReport>> {
        requirements
            .iter()
            .map(|r| self.validate(r.as_ref(), is_functional))
            .collect()
    }

    fn check_length(&self, requirement: &str, report: &mut ReportBuilder) {
        let words = word_count(requirement);
        if words < MIN_WORDS {
            log::debug!("Length check failed: {words} words");
            report.record(Finding::new(
                FindingType::InsufficientLength,
                format!(
                    "The requirement is too short to be meaningful ({words} words, at least {MIN_WORDS} expected)."
                ),
                "Expand the requirement to include more specific details.",
            ));
        }
    }

    fn check_ambiguity(&self, normalized: &str, report: &mut ReportBuilder) {
        let found: Vec<&str> = self
            .tables
            .weak_words()
            .iter()
            .filter(|w| w.occurs_in(normalized))
            .map(Term::display)
            .collect();

        if !found.is_empty() {
            log::debug!("Ambiguity check failed: {found:?}");
            report.record(Finding::new(
                FindingType::Ambiguity,
                format!("Ambiguous words found: {}", found.join(", ")),
                "Replace vague words with precise, concrete terms.",
            ));
        }
    }

    fn check_keywords(&self, normalized: &str, is_functional: bool, report: &mut ReportBuilder) {
        let keywords = self.tables.keywords_for(is_functional);
        if keywords.iter().any(|k| k.occurs_in(normalized)) {
            return;
        }

        log::debug!("Keyword check failed (functional: {is_functional})");
        let examples: Vec<&str> = keywords
            .iter()
            .take(KEYWORD_EXAMPLES)
            .map(Term::display)
            .collect();
        report.record(Finding::new(
            FindingType::MissingKeywords,
            "No words characteristic of the requirement type were found.",
            format!("Include words such as: {}", examples.join(", ")),
        ));
    }

    fn check_specificity(&self, requirement: &str, report: &mut ReportBuilder) -> Result<()> {
        let Some(tagger) = &self.tagger else {
            return Ok(());
        };

        let tokens = tagger.tag(requirement)?;
        let counts = TagCounts::from_tokens(&tokens);
        if counts.verbs == 0 || counts.nouns < MIN_NOUNS {
            log::debug!(
                "Specificity check failed: {} verbs, {} nouns",
                counts.verbs,
                counts.nouns
            );
            report.record(Finding::new(
                FindingType::LackOfSpecificity,
                "The requirement lacks specific verbs or nouns.",
                "Clearly state the action (verb) and the object (noun) of the requirement.",
            ));
        }
        Ok(())
    }

    fn check_measurability(&self, normalized: &str, report: &mut ReportBuilder) {
        let has_metrics = self
            .tables
            .metric_indicators()
            .iter()
            .any(|m| m.occurs_in(normalized));

        if !has_metrics {
            report.record(Finding::new(
                FindingType::Measurability,
                "No specific metrics were detected.",
                "Consider adding metrics or measurable acceptance criteria.",
            ));
        }
    }
}

/// Builder for [`Validator`]
#[derive(Default)]
pub struct ValidatorBuilder {
    tables: Option<Arc<RuleTables>>,
    tagger: Option<Arc<dyn PosTagger>>,
}

impl ValidatorBuilder {
    /// Use custom rule tables instead of the built-in ones
    pub fn tables(mut self, tables: Arc<RuleTables>) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Enable the specificity check with `tagger`
    pub fn tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Set or clear the tagger
    pub fn maybe_tagger(mut self, tagger: Option<Arc<dyn PosTagger>>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Build the validator
    pub fn build(self) -> Result<Validator> {
        let tables = match self.tables {
            Some(tables) => tables,
            None => default_tables()?,
        };

        match &self.tagger {
            Some(tagger) => log::info!("Specificity check enabled ({})", tagger.name()),
            None => log::warn!("No POS tagger available; specificity check disabled"),
        }

        Ok(Validator {
            tables,
            tagger: self.tagger,
        })
    }
}
