//! Engagement scorer
//!
//! Maps the sentiment backend's compound polarity of the cleaned
//! (non-lowered) text onto fixed score thresholds.

use super::CriterionScore;
use crate::error::Result;
use crate::sentiment::SentimentModel;
use crate::text::Preprocessed;

pub fn score(pp: &Preprocessed, sentiment: &dyn SentimentModel) -> Result<CriterionScore> {
    let compound = sentiment.polarity(&pp.text)?;

    let s = if compound >= 0.9 {
        1.0
    } else if compound >= 0.7 {
        0.8
    } else if compound >= 0.5 {
        0.6
    } else if compound >= 0.3 {
        0.4
    } else {
        0.2
    };

    let mut result = CriterionScore::new(s);
    result.compound = Some(compound);
    Ok(result)
}
