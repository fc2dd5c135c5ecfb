//! Rule-based quality linter for natural-language software requirements
//!
//! A requirement statement is checked against a fixed, ordered set of
//! heuristics (length, ambiguity, characteristic keywords, grammatical
//! specificity, measurability). Every check always runs; the result is a
//! [`ValidationReport`] collecting every error and suggestion found.
//!
//! # Architecture
//!
//! - **Rule tables**: immutable term lists loaded once from TOML and shared
//!   through `Arc` across all validation calls
//! - **Normalizer**: lower-casing and accent stripping used for matching
//! - **Tagger seam**: an optional part-of-speech capability supplied by the
//!   caller; without it the specificity check is skipped
//! - **Validator**: the ordered check pipeline
//!
//! # Example
//!
//! ```rust
//! use reqlint_core::Validator;
//!
//! let validator = Validator::builder().build().unwrap();
//! let report = validator
//!     .validate("El sistema debe calcular el total de ventas mensuales con precisión", true)
//!     .unwrap();
//!
//! assert!(report.is_valid());
//! assert_eq!(report.suggestions().len(), 1);
//! ```

pub mod dto;
pub mod error;
pub mod normalize;
pub mod report;
pub mod rules;
pub mod status;
pub mod tagger;
pub mod validator;

pub use dto::{ErrorResponseDto, ValidationReportDto, ValidationRequest};
pub use error::{CoreError, Result, TaggerError};
pub use normalize::{normalize, word_count};
pub use report::{Finding, FindingKind, FindingType, ValidationReport};
pub use rules::{default_tables, get_tables, RuleConfig, RuleTables, Term};
pub use status::ServiceStatus;
pub use tagger::{PosTag, PosTagger, TaggedToken};
pub use validator::{Validator, ValidatorBuilder, MIN_NOUNS, MIN_WORDS};
