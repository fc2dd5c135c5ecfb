//! Data Transfer Objects for the validation boundary
//!
//! The wire shape names the advisory text `suggestion` on errors and
//! `recommendation` on suggestions. Internally both are [`Finding::advice`].

use serde::{Deserialize, Serialize};

use crate::report::{Finding, ValidationReport};

/// Input of one validation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Requirement text
    pub requirement: String,
    /// Functional (true) or non-functional (false)
    pub is_functional: bool,
}

/// Error entry on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// Finding label
    #[serde(rename = "type")]
    pub finding_type: String,
    /// What was detected
    pub description: String,
    /// How to fix it
    pub suggestion: String,
}

/// Suggestion entry on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionDto {
    /// Finding label
    #[serde(rename = "type")]
    pub finding_type: String,
    /// What was detected
    pub description: String,
    /// Recommended improvement
    pub recommendation: String,
}

/// Validation report on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReportDto {
    /// The requirement exactly as submitted
    pub original_text: String,
    /// True if `errors` is empty
    pub is_valid: bool,
    /// Errors in check order
    pub errors: Vec<ErrorDto>,
    /// Suggestions in check order
    pub suggestions: Vec<SuggestionDto>,
}

/// Internal fault on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    /// Human-readable message
    pub detail: String,
}

impl ErrorResponseDto {
    /// Wrap any displayable fault
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

impl From<&Finding> for ErrorDto {
    fn from(finding: &Finding) -> Self {
        Self {
            finding_type: finding.finding_type.label().to_string(),
            description: finding.description.clone(),
            suggestion: finding.advice.clone(),
        }
    }
}

impl From<&Finding> for SuggestionDto {
    fn from(finding: &Finding) -> Self {
        Self {
            finding_type: finding.finding_type.label().to_string(),
            description: finding.description.clone(),
            recommendation: finding.advice.clone(),
        }
    }
}

impl From<&ValidationReport> for ValidationReportDto {
    fn from(report: &ValidationReport) -> Self {
        Self {
            original_text: report.original_text().to_string(),
            is_valid: report.is_valid(),
            errors: report.errors().iter().map(ErrorDto::from).collect(),
            suggestions: report.suggestions().iter().map(SuggestionDto::from).collect(),
        }
    }
}
