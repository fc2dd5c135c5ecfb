//! Configuration structures and validation
//!
//! This module defines the TOML schema for rule tables.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::normalize::normalize;

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    pub weak_words: WeakWords,
    pub keywords: Keywords,
    pub metrics: Metrics,
}

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Ambiguity markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakWords {
    pub terms: Vec<String>,
}

/// Characteristic keywords per requirement class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keywords {
    pub functional: Vec<String>,
    pub non_functional: Vec<String>,
}

/// Quantified acceptance criteria markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    pub indicators: Vec<String>,
}

impl RuleConfig {
    /// Parse a configuration from TOML
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Rule set code is required".to_string());
        }

        let lists = [
            ("weak_words.terms", &self.weak_words.terms),
            ("keywords.functional", &self.keywords.functional),
            ("keywords.non_functional", &self.keywords.non_functional),
            ("metrics.indicators", &self.metrics.indicators),
        ];
        for (name, terms) in lists {
            if terms.is_empty() {
                return Err(format!("No terms defined in {name}"));
            }
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(format!("Blank term in {name}"));
            }
        }

        let functional: HashSet<String> =
            self.keywords.functional.iter().map(|k| normalize(k)).collect();
        if let Some(shared) = self
            .keywords
            .non_functional
            .iter()
            .find(|k| functional.contains(&normalize(k)))
        {
            return Err(format!(
                "Keyword '{shared}' is listed as both functional and non-functional"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleConfig {
        RuleConfig::from_toml(
            r#"
[metadata]
code = "test"
name = "Test"

[weak_words]
terms = ["maybe"]

[keywords]
functional = ["shall"]
non_functional = ["latency"]

[metrics]
indicators = ["%"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_config() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_missing_code() {
        let mut config = sample();
        config.metadata.code = " ".to_string();
        assert_eq!(config.validate().unwrap_err(), "Rule set code is required");
    }

    #[test]
    fn test_empty_list() {
        let mut config = sample();
        config.metrics.indicators.clear();
        assert_eq!(
            config.validate().unwrap_err(),
            "No terms defined in metrics.indicators"
        );
    }

    #[test]
    fn test_blank_term() {
        let mut config = sample();
        config.weak_words.terms.push("  ".to_string());
        assert_eq!(config.validate().unwrap_err(), "Blank term in weak_words.terms");
    }

    #[test]
    fn test_overlapping_keyword_sets_rejected() {
        let mut config = sample();
        config.keywords.functional.push("Seguridad".to_string());
        config.keywords.non_functional.push("seguridad".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.contains("both functional and non-functional"));
    }

    #[test]
    fn test_missing_section_fails_to_parse() {
        let result = RuleConfig::from_toml(
            r#"
[metadata]
code = "test"
name = "Test"
"#,
        );
        assert!(result.is_err());
    }
}
