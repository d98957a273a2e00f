//! Speech rate scorer
//!
//! Words per minute, bucketed around the 111-140 ideal band. A missing or
//! non-positive duration cannot be trusted, so the scorer returns a neutral
//! default instead of failing.

use super::{round2, CriterionScore};
use crate::text::Preprocessed;

/// Score when no usable duration was supplied
const NEUTRAL_DEFAULT: f64 = 0.7;

pub fn score(pp: &Preprocessed, duration_seconds: Option<f64>) -> CriterionScore {
    let Some(duration) = duration_seconds.filter(|d| *d > 0.0) else {
        return CriterionScore::new(NEUTRAL_DEFAULT);
    };

    let wpm = pp.word_count as f64 * 60.0 / duration;

    let s = if (111.0..=140.0).contains(&wpm) {
        1.0
    } else if (81.0..111.0).contains(&wpm) || (wpm > 140.0 && wpm <= 160.0) {
        0.8
    } else if (61.0..81.0).contains(&wpm) || (wpm > 160.0 && wpm <= 180.0) {
        0.6
    } else {
        0.4
    };

    let mut result = CriterionScore::new(s);
    result.wpm = Some(round2(wpm));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::preprocess;

    fn with_words(n: usize) -> Preprocessed {
        let text = vec!["word"; n].join(" ");
        let pp = preprocess(&text);
        assert_eq!(pp.word_count, n);
        pp
    }

    #[test]
    fn test_missing_duration_neutral_default() {
        let result = score(&with_words(100), None);
        assert_eq!(result.score, NEUTRAL_DEFAULT);
        assert_eq!(result.wpm, None);
    }

    #[test]
    fn test_zero_and_negative_duration_neutral_default() {
        assert_eq!(score(&with_words(100), Some(0.0)).score, NEUTRAL_DEFAULT);
        assert_eq!(score(&with_words(100), Some(-3.0)).score, NEUTRAL_DEFAULT);
    }

    #[test]
    fn test_ideal_band() {
        // 120 words in 60s -> 120 wpm
        let result = score(&with_words(120), Some(60.0));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.wpm, Some(120.0));
    }

    #[test]
    fn test_boundary_140_is_ideal_141_is_not() {
        assert_eq!(score(&with_words(140), Some(60.0)).score, 1.0);
        assert_eq!(score(&with_words(141), Some(60.0)).score, 0.8);
    }

    #[test]
    fn test_150_wpm_fast_band() {
        let result = score(&with_words(150), Some(60.0));
        assert_eq!(result.score, 0.8);
        assert_eq!(result.wpm, Some(150.0));
    }

    #[test]
    fn test_slow_bands() {
        assert_eq!(score(&with_words(90), Some(60.0)).score, 0.8);
        assert_eq!(score(&with_words(70), Some(60.0)).score, 0.6);
        assert_eq!(score(&with_words(170), Some(60.0)).score, 0.6);
        assert_eq!(score(&with_words(40), Some(60.0)).score, 0.4);
        assert_eq!(score(&with_words(200), Some(60.0)).score, 0.4);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(score(&with_words(111), Some(60.0)).score, 1.0);
        assert_eq!(score(&with_words(81), Some(60.0)).score, 0.8);
        assert_eq!(score(&with_words(160), Some(60.0)).score, 0.8);
        assert_eq!(score(&with_words(161), Some(60.0)).score, 0.6);
        assert_eq!(score(&with_words(180), Some(60.0)).score, 0.6);
        assert_eq!(score(&with_words(181), Some(60.0)).score, 0.4);
        assert_eq!(score(&with_words(61), Some(60.0)).score, 0.6);
        assert_eq!(score(&with_words(60), Some(60.0)).score, 0.4);
    }

    #[test]
    fn test_wpm_rounded_two_decimals() {
        // 100 words in 70s -> 85.714... wpm
        let result = score(&with_words(100), Some(70.0));
        assert_eq!(result.wpm, Some(85.71));
        assert_eq!(result.score, 0.8);
    }

    #[test]
    fn test_empty_transcript_with_duration() {
        // 0 wpm falls in the lowest band rather than erroring
        let result = score(&preprocess(""), Some(60.0));
        assert_eq!(result.score, 0.4);
        assert_eq!(result.wpm, Some(0.0));
    }
}
