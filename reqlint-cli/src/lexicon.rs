//! Dictionary-backed part-of-speech tagger
//!
//! A lexicon is a TOML file listing known verbs and nouns:
//!
//! ```toml
//! [metadata]
//! name = "es-basic"
//!
//! [words]
//! verbs = ["debe", "calcular"]
//! nouns = ["sistema", "ventas"]
//! ```
//!
//! Words are matched in normalized form; unknown words are tagged `Other`.

use reqlint_core::{normalize, PosTag, PosTagger, TaggedToken, TaggerError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LexiconFile {
    metadata: LexiconMetadata,
    words: LexiconWords,
}

#[derive(Debug, Deserialize)]
struct LexiconMetadata {
    name: String,
}

#[derive(Debug, Deserialize)]
struct LexiconWords {
    #[serde(default)]
    verbs: Vec<String>,
    #[serde(default)]
    nouns: Vec<String>,
}

/// Tagger answering from a fixed word list
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    name: String,
    entries: HashMap<String, PosTag>,
}

impl LexiconTagger {
    /// Parse a lexicon from TOML
    pub fn from_toml(source: &str) -> Result<Self, TaggerError> {
        let file: LexiconFile =
            toml::from_str(source).map_err(|e| TaggerError::Unavailable(e.to_string()))?;

        if file.words.verbs.is_empty() && file.words.nouns.is_empty() {
            return Err(TaggerError::Unavailable("lexicon has no words".to_string()));
        }

        // nouns are inserted last and win on overlap
        let entries = file
            .words
            .verbs
            .iter()
            .map(|w| (normalize(w.trim()), PosTag::Verb))
            .chain(
                file.words
                    .nouns
                    .iter()
                    .map(|w| (normalize(w.trim()), PosTag::Noun)),
            )
            .collect();

        Ok(Self {
            name: format!("lexicon:{}", file.metadata.name),
            entries,
        })
    }

    /// Load a lexicon file
    pub fn from_file(path: &Path) -> Result<Self, TaggerError> {
        let source = fs::read_to_string(path)
            .map_err(|e| TaggerError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Number of known words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Ok(sentence
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| {
                let tag = self
                    .entries
                    .get(&normalize(w))
                    .copied()
                    .unwrap_or(PosTag::Other);
                TaggedToken::new(w, tag)
            })
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Try to acquire a tagger once at startup
///
/// Returns `None` (degraded mode) when no lexicon is configured or it cannot
/// be loaded.
pub fn acquire(path: Option<&Path>) -> Option<Arc<dyn PosTagger>> {
    let path = path?;
    match LexiconTagger::from_file(path) {
        Ok(tagger) => {
            log::info!(
                "Loaded lexicon {} ({} words)",
                path.display(),
                tagger.len()
            );
            Some(Arc::new(tagger))
        }
        Err(e) => {
            log::warn!("Running without POS tagger: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LEXICON: &str = r#"
[metadata]
name = "test"

[words]
verbs = ["debe", "calcular"]
nouns = ["sistema", "ventas", "precisión"]
"#;

    #[test]
    fn test_tags_known_words() {
        let tagger = LexiconTagger::from_toml(LEXICON).unwrap();
        let tokens = tagger.tag("El Sistema debe calcular las ventas.").unwrap();

        let tags: Vec<PosTag> = tokens.iter().map(|t| t.tag).collect();
        assert_eq!(
            tags,
            vec![
                PosTag::Other,
                PosTag::Noun,
                PosTag::Verb,
                PosTag::Verb,
                PosTag::Other,
                PosTag::Noun,
            ]
        );
        assert_eq!(tokens[1].text, "Sistema");
    }

    #[test]
    fn test_matches_without_accents() {
        let tagger = LexiconTagger::from_toml(LEXICON).unwrap();
        let tokens = tagger.tag("precision").unwrap();
        assert_eq!(tokens[0].tag, PosTag::Noun);
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let err = LexiconTagger::from_toml("[metadata]\nname = \"x\"\n[words]\n").unwrap_err();
        assert!(matches!(err, TaggerError::Unavailable(_)));
    }

    #[test]
    fn test_name() {
        let tagger = LexiconTagger::from_toml(LEXICON).unwrap();
        assert_eq!(tagger.name(), "lexicon:test");
        assert_eq!(tagger.len(), 5);
    }

    #[test]
    fn test_acquire_missing_file_is_degraded() {
        let dir = TempDir::new().unwrap();
        assert!(acquire(Some(&dir.path().join("missing.toml"))).is_none());
        assert!(acquire(None).is_none());
    }

    #[test]
    fn test_acquire_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexicon.toml");
        fs::write(&path, LEXICON).unwrap();
        let tagger = acquire(Some(&path)).unwrap();
        assert_eq!(tagger.name(), "lexicon:test");
    }
}
