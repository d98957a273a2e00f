//! Language & grammar scorer
//!
//! Unrecognized tokens stand in for grammar errors: the dictionary backend
//! reports the subset of tokens outside its vocabulary, and the error rate
//! per 100 words maps onto fixed buckets.

use super::{round2, CriterionScore};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::text::Preprocessed;

pub fn score(pp: &Preprocessed, dictionary: &dyn Dictionary) -> Result<CriterionScore> {
    // Cannot meaningfully grade an empty transcript
    if pp.word_count == 0 {
        return Ok(CriterionScore::new(0.0));
    }

    let errors = dictionary.unknown(&pp.tokens)?;
    let errors_per_100 = errors.len() as f64 / pp.word_count as f64 * 100.0;

    let s = if errors_per_100 <= 1.0 {
        1.0
    } else if errors_per_100 <= 3.0 {
        0.8
    } else if errors_per_100 <= 5.0 {
        0.6
    } else if errors_per_100 <= 10.0 {
        0.4
    } else {
        0.2
    };

    let mut result = CriterionScore::new(s);
    result.errors = Some(errors);
    result.errors_per_100 = Some(round2(errors_per_100));
    Ok(result)
}
