//! Runtime rule tables built from configuration

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::normalize::normalize;
use crate::rules::config::RuleConfig;

/// A table entry in its written and comparison forms
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Term {
    display: String,
    normalized: String,
}

impl Term {
    /// Build a term, precomputing its normalized form
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let normalized = normalize(&display);
        Self {
            display,
            normalized,
        }
    }

    /// Spelling as written in the table
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Lower-cased, accent-free form used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Substring test against already-normalized text
    #[inline]
    pub fn occurs_in(&self, normalized_text: &str) -> bool {
        normalized_text.contains(self.normalized.as_str())
    }
}

/// Immutable rule tables shared by every validation call
#[derive(Debug, Clone, Serialize)]
pub struct RuleTables {
    code: String,
    name: String,
    weak_words: Vec<Term>,
    functional_keywords: Vec<Term>,
    non_functional_keywords: Vec<Term>,
    metric_indicators: Vec<Term>,
}

fn terms(list: &[String]) -> Vec<Term> {
    list.iter().map(|s| Term::new(s.trim())).collect()
}

impl RuleTables {
    /// Create from configuration
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        config.validate().map_err(CoreError::Config)?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            weak_words: terms(&config.weak_words.terms),
            functional_keywords: terms(&config.keywords.functional),
            non_functional_keywords: terms(&config.keywords.non_functional),
            metric_indicators: terms(&config.metrics.indicators),
        })
    }

    /// Parse and build from a TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        let config = RuleConfig::from_toml(source)?;
        Self::from_config(&config)
    }

    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let tables = Self::from_toml(&source)?;
        log::info!(
            "Loaded rule tables '{}' from {}",
            tables.code,
            path.display()
        );
        Ok(tables)
    }

    /// Rule set code (e.g. "es")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Rule set display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weak_words(&self) -> &[Term] {
        &self.weak_words
    }

    pub fn functional_keywords(&self) -> &[Term] {
        &self.functional_keywords
    }

    pub fn non_functional_keywords(&self) -> &[Term] {
        &self.non_functional_keywords
    }

    pub fn metric_indicators(&self) -> &[Term] {
        &self.metric_indicators
    }

    /// Keywords authoritative for the given requirement class
    pub fn keywords_for(&self, is_functional: bool) -> &[Term] {
        if is_functional {
            &self.functional_keywords
        } else {
            &self.non_functional_keywords
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[metadata]
code = "test"
name = "Test"

[weak_words]
terms = ["Quizás", " maybe "]

[keywords]
functional = ["shall", "must", "will", "should"]
non_functional = ["latency"]

[metrics]
indicators = ["%"]
"#;

    #[test]
    fn test_terms_are_normalized_and_trimmed() {
        let tables = RuleTables::from_toml(SAMPLE).unwrap();
        let weak = tables.weak_words();
        assert_eq!(weak[0].display(), "Quizás");
        assert_eq!(weak[0].normalized(), "quizas");
        assert_eq!(weak[1].display(), "maybe");
    }

    #[test]
    fn test_table_order_preserved() {
        let tables = RuleTables::from_toml(SAMPLE).unwrap();
        let names: Vec<&str> = tables
            .functional_keywords()
            .iter()
            .map(Term::display)
            .collect();
        assert_eq!(names, vec!["shall", "must", "will", "should"]);
    }

    #[test]
    fn test_keywords_for() {
        let tables = RuleTables::from_toml(SAMPLE).unwrap();
        assert_eq!(tables.keywords_for(true).len(), 4);
        assert_eq!(tables.keywords_for(false)[0].display(), "latency");
    }

    #[test]
    fn test_occurs_in() {
        let term = Term::new("Tiempo de Respuesta");
        assert!(term.occurs_in("el tiempo de respuesta sera bajo"));
        assert!(!term.occurs_in("el tiempo sera bajo"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let tables = RuleTables::from_file(file.path()).unwrap();
        assert_eq!(tables.code(), "test");
        assert_eq!(tables.name(), "Test");
    }

    #[test]
    fn test_from_missing_file() {
        let err = RuleTables::from_file(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let source = SAMPLE.replace("indicators = [\"%\"]", "indicators = []");
        let err = RuleTables::from_toml(&source).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
