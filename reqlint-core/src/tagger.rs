//! Part-of-speech tagging capability consumed by the specificity check
//!
//! The core ships no tagger. Callers plug one in through [`PosTagger`] when
//! building a [`Validator`](crate::Validator); without one the validator runs
//! in degraded mode and the specificity check is skipped.

use serde::{Deserialize, Serialize};

use crate::error::TaggerError;

/// Coarse part-of-speech tag
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosTag {
    /// Verb
    Verb,
    /// Noun
    Noun,
    /// Anything else
    Other,
}

/// One token of a tagged sentence
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Token text as it appears in the sentence
    pub text: String,
    /// Assigned tag
    pub tag: PosTag,
}

impl TaggedToken {
    /// Create a tagged token
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// Tag each word of a sentence with a part of speech
///
/// Implementations are shared across concurrent validation calls, hence the
/// `Send + Sync` bound. A tagger that is not safe for concurrent use must
/// serialize access internally.
pub trait PosTagger: Send + Sync {
    /// Tag `sentence`, returning its tokens in order
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, TaggerError>;

    /// Human-readable backend name, reported by the status query
    fn name(&self) -> &str;
}

/// Verb and noun counts of a tagged sentence
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub(crate) struct TagCounts {
    pub verbs: usize,
    pub nouns: usize,
}

impl TagCounts {
    pub(crate) fn from_tokens(tokens: &[TaggedToken]) -> Self {
        tokens.iter().fold(Self::default(), |mut acc, token| {
            match token.tag {
                PosTag::Verb => acc.verbs += 1,
                PosTag::Noun => acc.nouns += 1,
                PosTag::Other => {}
            }
            acc
        })
    }
}
