//! Behavior with and without a part-of-speech tagger

use reqlint_core::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts calls and tags nothing as verb or noun
#[derive(Default)]
struct CountingTagger {
    calls: AtomicUsize,
}

impl PosTagger for CountingTagger {
    fn tag(&self, sentence: &str) -> std::result::Result<Vec<TaggedToken>, TaggerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(sentence
            .split_whitespace()
            .map(|w| TaggedToken::new(w, PosTag::Other))
            .collect())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

const INPUTS: &[&str] = &[
    "",
    "hola",
    "El sistema debe calcular el total de ventas mensuales con precisión",
    "Todo muy muy muy bien",
];

#[test]
fn test_degraded_mode_skips_specificity() {
    let validator = Validator::new().unwrap();
    assert!(!validator.has_tagger());
    assert!(!validator.status().specificity_enabled());

    for text in INPUTS {
        for functional in [true, false] {
            let report = validator.validate(text, functional).unwrap();
            assert!(!report.has_error(FindingType::LackOfSpecificity));
        }
    }
}

#[test]
fn test_tagger_called_once_per_validation() {
    let tagger = Arc::new(CountingTagger::default());
    let validator = Validator::builder()
        .tagger(tagger.clone())
        .build()
        .unwrap();

    for text in INPUTS {
        let report = validator.validate(text, true).unwrap();
        // no verbs or nouns are ever tagged
        assert!(report.has_error(FindingType::LackOfSpecificity));
    }
    assert_eq!(tagger.calls.load(Ordering::SeqCst), INPUTS.len());
}

#[test]
fn test_specificity_error_follows_keyword_error() {
    let validator = Validator::builder()
        .tagger(Arc::new(CountingTagger::default()))
        .build()
        .unwrap();
    let report = validator.validate("hola", true).unwrap();

    let types: Vec<FindingType> = report.errors().iter().map(|f| f.finding_type).collect();
    assert_eq!(
        types,
        vec![
            FindingType::InsufficientLength,
            FindingType::MissingKeywords,
            FindingType::LackOfSpecificity,
        ]
    );
}

#[test]
fn test_maybe_tagger_none_is_degraded() {
    let validator = Validator::builder().maybe_tagger(None).build().unwrap();
    assert!(!validator.has_tagger());
    assert_eq!(validator.status().tagger, None);
}
