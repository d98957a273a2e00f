//! Scoring engine: criterion scorers, rubric dispatch, weighted aggregation
//!
//! One `ScoreEngine` is built per process from a loaded rubric and reused
//! read-only across scoring calls. `evaluate` is synchronous and idempotent:
//! the same transcript and duration always produce the same report.

mod content;
mod dispatch;
mod engagement;
mod filler;
mod grammar;
mod rate;

pub use dispatch::{route, DispatchRule, ScorerId, DISPATCH_RULES};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dictionary::{Dictionary, WordList};
use crate::error::Result;
use crate::phrases::PhraseBook;
use crate::rubric::RubricRow;
use crate::sentiment::{PolarityLexicon, SentimentModel};
use crate::text::{preprocess, Preprocessed};

/// Result record for one matched criterion.
///
/// `score` is in [0, 1] and `weight` is the matched rubric row's normalized
/// weight. The remaining fields are scorer-specific extras, omitted from
/// serialized output when absent.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CriterionScore {
    pub score: f64,
    pub weight: f64,
    /// Words per minute (speech rate)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wpm: Option<f64>,
    /// Unrecognized tokens (grammar)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Errors per 100 words (grammar)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors_per_100: Option<f64>,
    /// Filler occurrences per 100 words (clarity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler_rate: Option<f64>,
    /// Raw filler occurrence count (clarity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler_count: Option<u64>,
    /// Compound polarity (engagement)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound: Option<f64>,
}

impl CriterionScore {
    fn new(score: f64) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }
}

/// Full scoring result for one transcript
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreReport {
    /// Weighted overall score, 0-100, rounded to 2 decimals
    pub overall_score: f64,
    /// Result records keyed by criterion display label; only labels whose
    /// rubric row matched a dispatch rule are present
    pub criteria_scores: BTreeMap<String, CriterionScore>,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scoring engine holding the rubric, phrase tables, and analysis backends
pub struct ScoreEngine {
    rubric: Vec<RubricRow>,
    phrases: PhraseBook,
    dictionary: Box<dyn Dictionary>,
    sentiment: Box<dyn SentimentModel>,
}

impl ScoreEngine {
    /// Build an engine over a loaded rubric with the bundled backends
    pub fn new(rubric: Vec<RubricRow>) -> Self {
        Self {
            rubric,
            phrases: PhraseBook::default(),
            dictionary: Box::new(WordList::new()),
            sentiment: Box::new(PolarityLexicon::new()),
        }
    }

    /// Replace the phrase tables
    pub fn with_phrases(mut self, phrases: PhraseBook) -> Self {
        self.phrases = phrases;
        self
    }

    /// Replace the dictionary backend
    pub fn with_dictionary(mut self, dictionary: Box<dyn Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Replace the sentiment backend
    pub fn with_sentiment(mut self, sentiment: Box<dyn SentimentModel>) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// The loaded rubric rows
    pub fn rubric(&self) -> &[RubricRow] {
        &self.rubric
    }

    /// Score one transcript against the rubric.
    ///
    /// Rows matching no dispatch rule are skipped; rows matching the same
    /// criterion label overwrite earlier results (last match wins). Backend
    /// failures propagate with no partial result.
    pub fn evaluate(&self, transcript: &str, duration_seconds: Option<f64>) -> Result<ScoreReport> {
        let pp = preprocess(transcript);
        tracing::debug!(
            word_count = pp.word_count,
            sentence_count = pp.sentence_count,
            "preprocessed transcript"
        );

        let mut criteria_scores: BTreeMap<String, CriterionScore> = BTreeMap::new();
        for row in &self.rubric {
            let Some(rule) = route(row) else {
                tracing::debug!(criteria = %row.criteria, metric = %row.metric, "rubric row matched no scorer");
                continue;
            };
            let mut result = self.run_scorer(rule.scorer, &pp, duration_seconds)?;
            result.weight = row.weight;
            criteria_scores.insert(rule.label.to_string(), result);
        }

        let overall: f64 = criteria_scores
            .values()
            .map(|c| c.score * c.weight)
            .sum();

        Ok(ScoreReport {
            overall_score: round2(overall * 100.0),
            criteria_scores,
            word_count: pp.word_count,
            sentence_count: pp.sentence_count,
        })
    }

    fn run_scorer(
        &self,
        scorer: ScorerId,
        pp: &Preprocessed,
        duration_seconds: Option<f64>,
    ) -> Result<CriterionScore> {
        match scorer {
            ScorerId::Content => Ok(CriterionScore::new(content::score(pp, &self.phrases))),
            ScorerId::SpeechRate => Ok(rate::score(pp, duration_seconds)),
            ScorerId::Grammar => grammar::score(pp, self.dictionary.as_ref()),
            ScorerId::Filler => Ok(filler::score(pp, &self.phrases)),
            ScorerId::Engagement => engagement::score(pp, self.sentiment.as_ref()),
        }
    }
}
