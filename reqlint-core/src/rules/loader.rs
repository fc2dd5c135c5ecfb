//! Rule table loader
//!
//! Manages the embedded rule tables with process-wide caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::rules::tables::RuleTables;

/// Embedded Spanish rule configuration
pub const DEFAULT_RULES_TOML: &str = include_str!("../../configs/rules/spanish.toml");

/// Embedded rule tables, keyed by code and name
static EMBEDDED: OnceLock<HashMap<String, Arc<RuleTables>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<RuleTables>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match RuleTables::from_toml(DEFAULT_RULES_TOML) {
            Ok(tables) => {
                let tables = Arc::new(tables);
                map.insert("es".to_string(), tables.clone());
                map.insert("spanish".to_string(), tables);
            }
            Err(e) => {
                log::error!("Failed to load embedded Spanish rules: {e}");
            }
        }

        map
    })
}

/// Load embedded rule tables by code
pub fn get_tables(code: &str) -> Result<Arc<RuleTables>> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::Config(format!("Unknown rule set: {code}")))
}

/// The built-in Spanish rule tables
pub fn default_tables() -> Result<Arc<RuleTables>> {
    get_tables("es")
}
