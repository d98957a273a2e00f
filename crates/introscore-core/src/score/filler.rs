//! Clarity scorer: filler-word rate
//!
//! Counts raw substring occurrences of each filler term over the lowered
//! text. Matches inside longer words ("like" in "likely") are counted; that
//! is inherited behavior, kept deliberately.

use super::{round2, CriterionScore};
use crate::phrases::PhraseBook;
use crate::text::Preprocessed;

pub fn score(pp: &Preprocessed, phrases: &PhraseBook) -> CriterionScore {
    if pp.word_count == 0 {
        let mut result = CriterionScore::new(0.0);
        result.filler_count = Some(0);
        return result;
    }

    let filler_count: u64 = phrases
        .fillers
        .iter()
        .map(|f| count_occurrences(&pp.lowered, f) as u64)
        .sum();
    let rate = filler_count as f64 / pp.word_count as f64 * 100.0;

    let s = if rate <= 1.0 {
        1.0
    } else if rate <= 3.0 {
        0.8
    } else if rate <= 5.0 {
        0.6
    } else if rate <= 8.0 {
        0.4
    } else {
        0.2
    };

    let mut result = CriterionScore::new(s);
    result.filler_rate = Some(round2(rate));
    result.filler_count = Some(filler_count);
    result
}

/// Non-overlapping substring occurrence count
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        count += 1;
        from += pos + needle.len();
    }
    count
}
