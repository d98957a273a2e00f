//! Content & structure scorer
//!
//! Average of three sub-scores in [0, 1]: salutation presence, coverage of
//! the seven required-info blocks, and narrative flow (greeting before name
//! introduction before closing).

use crate::phrases::{first_position, has_any, PhraseBook};
use crate::text::Preprocessed;

/// Flow score when greeting, name, and closing all appear in order
const FLOW_ORDERED: f64 = 1.0;
/// Flow score when all three anchors appear but out of order
const FLOW_MISORDERED: f64 = 0.3;
/// Flow score when any anchor is missing
const FLOW_PARTIAL: f64 = 0.5;

pub fn score(pp: &Preprocessed, phrases: &PhraseBook) -> f64 {
    let salutation = if has_any(&pp.lowered, &phrases.greetings) {
        1.0
    } else {
        0.0
    };

    let blocks = phrases.info_blocks();
    let hits = blocks
        .iter()
        .filter(|block| has_any(&pp.lowered, block))
        .count();
    let coverage = hits as f64 / blocks.len() as f64;

    let flow = flow_score(pp, phrases);

    (salutation + coverage + flow) / 3.0
}

fn flow_score(pp: &Preprocessed, phrases: &PhraseBook) -> f64 {
    let greeting = first_position(&pp.lowered, &phrases.greetings);
    let name = first_position(&pp.lowered, &phrases.name);
    let closing = first_position(&pp.lowered, &phrases.closings);

    match (greeting, name, closing) {
        (Some(g), Some(n), Some(c)) => {
            if g < n && n < c {
                FLOW_ORDERED
            } else {
                FLOW_MISORDERED
            }
        }
        _ => FLOW_PARTIAL,
    }
}
