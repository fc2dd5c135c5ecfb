//! Liveness and identity report

use serde::{Deserialize, Serialize};

/// Name reported by the status query
pub const SERVICE_NAME: &str = "Requirement Validator";

/// Status of a configured validator
///
/// `tagger` is `None` in degraded mode, in which case reports never contain
/// a "Lack of Specificity" finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
    pub version: String,
    /// Code of the active rule tables
    pub language: String,
    /// Name of the active tagger backend, if any
    pub tagger: Option<String>,
}

impl ServiceStatus {
    pub(crate) fn online(language: &str, tagger: Option<&str>) -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            status: "online".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: language.to_string(),
            tagger: tagger.map(str::to_string),
        }
    }

    /// Whether the specificity check is active
    pub fn specificity_enabled(&self) -> bool {
        self.tagger.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_status() {
        let status = ServiceStatus::online("es", None);
        assert_eq!(status.name, SERVICE_NAME);
        assert_eq!(status.status, "online");
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert!(!status.specificity_enabled());
    }

    #[test]
    fn test_status_with_tagger() {
        let status = ServiceStatus::online("es", Some("lexicon"));
        assert!(status.specificity_enabled());
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["tagger"], "lexicon");
    }
}
