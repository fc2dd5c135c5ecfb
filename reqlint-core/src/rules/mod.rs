//! Rule tables driving the string-matching checks
//!
//! Tables are data: a TOML file lists weak words, keywords per requirement
//! class and metric indicators. The built-in Spanish tables are embedded in
//! the binary and parsed once per process.

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod tables;

pub use config::{Keywords, Metadata, Metrics, RuleConfig, WeakWords};
pub use loader::{default_tables, get_tables, DEFAULT_RULES_TOML};
pub use tables::{RuleTables, Term};
