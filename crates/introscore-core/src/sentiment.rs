//! Sentiment polarity backend for the engagement scorer
//!
//! The engagement scorer only needs a single compound polarity value in
//! [-1, 1] for a text. The trait keeps the backend swappable; the bundled
//! implementation is a compact valence-lexicon model using the standard
//! normalization `sum / sqrt(sum^2 + 15)` with negation damping and
//! exclamation emphasis.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::Result;

/// Valence flip applied when a sentiment word follows a negator
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score
const NORM_ALPHA: f64 = 15.0;

/// Emphasis added per exclamation mark, capped at four marks
const EXCLAMATION_BOOST: f64 = 0.292;

/// How many tokens back a negator still applies
const NEGATION_WINDOW: usize = 3;

/// Word valences, roughly on the -4..4 scale of published sentiment lexicons
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("curious", 1.3),
    ("dream", 1.6),
    ("enjoy", 2.3),
    ("enjoyed", 2.3),
    ("excited", 2.4),
    ("exciting", 2.2),
    ("favorite", 2.0),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hope", 1.9),
    ("interesting", 1.7),
    ("joy", 2.9),
    ("kind", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 3.2),
    ("nice", 1.8),
    ("passion", 2.5),
    ("passionate", 2.3),
    ("proud", 2.2),
    ("smile", 1.5),
    ("special", 1.7),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("afraid", -2.0),
    ("angry", -2.3),
    ("bad", -2.5),
    ("boring", -1.3),
    ("cry", -2.2),
    ("difficult", -1.5),
    ("fail", -2.5),
    ("failed", -2.3),
    ("hate", -2.7),
    ("lonely", -2.0),
    ("lose", -1.9),
    ("lost", -1.3),
    ("nervous", -1.2),
    ("problem", -1.7),
    ("sad", -2.1),
    ("scared", -1.9),
    ("terrible", -2.1),
    ("tired", -1.2),
    ("trouble", -1.8),
    ("unhappy", -1.9),
    ("worried", -1.9),
    ("worst", -3.1),
];

/// Negator tokens; contraction fragments appear because tokenization splits
/// on the apostrophe ("don't" becomes "don", "t")
const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "cannot", "cant", "dont", "don", "didnt",
    "didn", "doesnt", "doesn", "isnt", "isn", "wasnt", "wasn", "arent", "aren", "wont", "won",
    "wouldnt", "wouldn", "couldnt", "couldn", "shouldnt", "shouldn",
];

static VALENCES: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();

fn valences() -> &'static HashMap<&'static str, f64> {
    VALENCES.get_or_init(|| LEXICON.iter().copied().collect())
}

/// Scores text polarity.
///
/// `polarity` returns a compound value in [-1, 1]; failures propagate to the
/// caller as request errors with no partial fallback.
pub trait SentimentModel {
    /// Compound polarity of the text
    fn polarity(&self, text: &str) -> Result<f64>;
}

/// Bundled valence-lexicon backend
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityLexicon;

impl PolarityLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentModel for PolarityLexicon {
    fn polarity(&self, text: &str) -> Result<f64> {
        let tokens: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let table = valences();
        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = table.get(token.as_str()) else {
                continue;
            };
            let negated = tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));
            sum += if negated {
                valence * NEGATION_SCALAR
            } else {
                valence
            };
        }

        let marks = text.matches('!').count().min(4) as f64;
        let emphasis = marks * EXCLAMATION_BOOST;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let compound = sum / (sum * sum + NORM_ALPHA).sqrt();
        Ok(compound.clamp(-1.0, 1.0))
    }
}
