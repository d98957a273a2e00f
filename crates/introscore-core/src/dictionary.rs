//! Dictionary lookup backend for the grammar scorer
//!
//! The grammar scorer only needs one capability: given a set of lowercase
//! word tokens, report the subset not recognized as valid words. Keeping
//! that behind a trait lets alternate backends (a system dictionary, a
//! network service) replace the bundled word list without touching scorer
//! logic.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::Result;

/// Embedded English word list for the bundled backend
const WORD_LIST: &str = include_str!("../assets/wordlist.txt");

static WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn words() -> &'static HashSet<&'static str> {
    WORDS.get_or_init(|| WORD_LIST.split_whitespace().collect())
}

/// Classifies unknown tokens.
///
/// Implementations are case-insensitive over lowercase tokens and must
/// preserve the input order of the unknown subset.
pub trait Dictionary {
    /// Return the subset of `tokens` not found in the vocabulary
    fn unknown(&self, tokens: &[String]) -> Result<Vec<String>>;
}

/// Bundled backend over the embedded word list.
///
/// Purely numeric tokens count as known, so ages and dates in a transcript
/// are not flagged as errors. A token whose plural suffix strips to a known
/// word also counts as known.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordList;

impl WordList {
    pub fn new() -> Self {
        Self
    }

    fn is_known(&self, token: &str) -> bool {
        if token.chars().all(|c| c.is_ascii_digit()) {
            return true;
        }
        let vocab = words();
        if vocab.contains(token) {
            return true;
        }
        if let Some(stem) = token.strip_suffix("ies") {
            if vocab.contains(format!("{stem}y").as_str()) {
                return true;
            }
        }
        if let Some(stem) = token.strip_suffix("es") {
            if vocab.contains(stem) {
                return true;
            }
        }
        if let Some(stem) = token.strip_suffix('s') {
            if vocab.contains(stem) {
                return true;
            }
        }
        false
    }
}

impl Dictionary for WordList {
    fn unknown(&self, tokens: &[String]) -> Result<Vec<String>> {
        // De-duplicate while preserving first-appearance order
        let mut seen = HashSet::new();
        Ok(tokens
            .iter()
            .filter(|t| !self.is_known(t))
            .filter(|t| seen.insert(t.as_str().to_string()))
            .cloned()
            .collect())
    }
}
