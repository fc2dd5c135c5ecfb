//! Validation report and findings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Partition a finding belongs to
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Makes the requirement invalid
    Error,
    /// Advisory only, never affects validity
    Suggestion,
}

/// Closed set of finding types produced by the validator
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FindingType {
    /// Fewer words than the minimum
    InsufficientLength,
    /// Hedging terms present
    Ambiguity,
    /// No keyword characteristic of the requirement class
    MissingKeywords,
    /// Missing verb or not enough nouns
    LackOfSpecificity,
    /// No quantified acceptance criteria
    Measurability,
}

impl FindingType {
    /// Stable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            FindingType::InsufficientLength => "Insufficient Length",
            FindingType::Ambiguity => "Ambiguity",
            FindingType::MissingKeywords => "Missing Characteristic Keywords",
            FindingType::LackOfSpecificity => "Lack of Specificity",
            FindingType::Measurability => "Measurability",
        }
    }

    /// Partition findings of this type are recorded in
    pub fn kind(&self) -> FindingKind {
        match self {
            FindingType::Measurability => FindingKind::Suggestion,
            _ => FindingKind::Error,
        }
    }
}

impl fmt::Display for FindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported issue or advisory note about a requirement
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Error or suggestion
    pub kind: FindingKind,
    /// What the finding is about
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    /// What was detected
    pub description: String,
    /// How to address it
    pub advice: String,
}

impl Finding {
    /// Create a finding; its kind follows from `finding_type`
    pub fn new(
        finding_type: FindingType,
        description: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            kind: finding_type.kind(),
            finding_type,
            description: description.into(),
            advice: advice.into(),
        }
    }
}

/// Result of validating one requirement
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    original_text: String,
    is_valid: bool,
    errors: Vec<Finding>,
    suggestions: Vec<Finding>,
}

impl ValidationReport {
    /// The requirement exactly as submitted
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// True if no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Errors in check execution order
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Advisory suggestions in check execution order
    pub fn suggestions(&self) -> &[Finding] {
        &self.suggestions
    }

    /// Whether an error of `finding_type` was recorded
    pub fn has_error(&self, finding_type: FindingType) -> bool {
        self.errors.iter().any(|f| f.finding_type == finding_type)
    }

    /// Whether a suggestion of `finding_type` was recorded
    pub fn has_suggestion(&self, finding_type: FindingType) -> bool {
        self.suggestions
            .iter()
            .any(|f| f.finding_type == finding_type)
    }
}

/// Accumulates findings for a single validation call
#[derive(Debug)]
pub(crate) struct ReportBuilder {
    original_text: String,
    errors: Vec<Finding>,
    suggestions: Vec<Finding>,
}

impl ReportBuilder {
    pub(crate) fn new(original_text: &str) -> Self {
        Self {
            original_text: original_text.to_string(),
            errors: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, finding: Finding) {
        match finding.kind {
            FindingKind::Error => self.errors.push(finding),
            FindingKind::Suggestion => self.suggestions.push(finding),
        }
    }

    pub(crate) fn finish(self) -> ValidationReport {
        ValidationReport {
            is_valid: self.errors.is_empty(),
            original_text: self.original_text,
            errors: self.errors,
            suggestions: self.suggestions,
        }
    }
}
