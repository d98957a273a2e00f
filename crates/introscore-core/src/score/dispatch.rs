//! Rubric-row to scorer dispatch
//!
//! An explicit ordered rule table replaces ad hoc string containment
//! checks: each rule pairs a predicate over the row's metric/criteria text
//! with a scorer and its display label. Rules are evaluated in order and
//! the first match wins; a row matching no rule is skipped. Matching is
//! case-sensitive, mirroring the rubric sheet's wording.

use crate::rubric::RubricRow;

/// The five criterion scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerId {
    Content,
    SpeechRate,
    Grammar,
    Filler,
    Engagement,
}

/// One dispatch rule: predicate, target scorer, display label
pub struct DispatchRule {
    pub scorer: ScorerId,
    pub label: &'static str,
    predicate: fn(&RubricRow) -> bool,
}

impl DispatchRule {
    /// True if this rule claims the row
    pub fn matches(&self, row: &RubricRow) -> bool {
        (self.predicate)(row)
    }
}

/// Ordered dispatch rules; first match wins per rubric row
pub static DISPATCH_RULES: &[DispatchRule] = &[
    DispatchRule {
        scorer: ScorerId::Content,
        label: "Content & Structure",
        predicate: |row| row.metric.contains("Salutation") || row.criteria.contains("Content"),
    },
    DispatchRule {
        scorer: ScorerId::SpeechRate,
        label: "Speech Rate",
        predicate: |row| row.metric.contains("Speech rate"),
    },
    DispatchRule {
        scorer: ScorerId::Grammar,
        label: "Language & Grammar",
        predicate: |row| row.metric.contains("Grammar errors"),
    },
    DispatchRule {
        scorer: ScorerId::Filler,
        label: "Clarity",
        predicate: |row| row.metric.contains("Filler Word"),
    },
    DispatchRule {
        scorer: ScorerId::Engagement,
        label: "Engagement",
        predicate: |row| row.metric.contains("Sentiment") || row.metric.contains("positivity"),
    },
];

/// Select the scorer for a rubric row, or `None` if no rule matches
pub fn route(row: &RubricRow) -> Option<&'static DispatchRule> {
    DISPATCH_RULES.iter().find(|rule| rule.matches(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(criteria: &str, metric: &str) -> RubricRow {
        RubricRow {
            criteria: criteria.to_string(),
            metric: metric.to_string(),
            weight: 0.2,
        }
    }

    #[test]
    fn test_route_each_rule() {
        let cases = [
            ("Content", "Salutation and flow", ScorerId::Content),
            ("Delivery", "Speech rate in wpm", ScorerId::SpeechRate),
            ("Language", "Grammar errors per 100 words", ScorerId::Grammar),
            ("Fluency", "Filler Word rate", ScorerId::Filler),
            ("Engagement", "Sentiment compound", ScorerId::Engagement),
            ("Engagement", "Overall positivity", ScorerId::Engagement),
        ];
        for (criteria, metric, expected) in cases {
            let rule = route(&row(criteria, metric)).expect(metric);
            assert_eq!(rule.scorer, expected, "{metric}");
        }
    }

    #[test]
    fn test_route_criteria_fallback_for_content() {
        // Metric text without "Salutation" still routes via criteria name
        let rule = route(&row("Content depth", "Covers required info")).unwrap();
        assert_eq!(rule.scorer, ScorerId::Content);
    }

    #[test]
    fn test_route_unmatched_row_is_none() {
        assert!(route(&row("Posture", "Eye contact")).is_none());
    }

    #[test]
    fn test_route_first_match_wins() {
        // Both the content and speech-rate predicates match; rule order
        // decides
        let rule = route(&row("Content", "Salutation and Speech rate")).unwrap();
        assert_eq!(rule.scorer, ScorerId::Content);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(route(&row("Delivery", "speech rate")).is_none());
        assert!(route(&row("content", "covers intro")).is_none());
    }

    #[test]
    fn test_labels_are_the_five_fixed_labels() {
        let labels: Vec<_> = DISPATCH_RULES.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Content & Structure",
                "Speech Rate",
                "Language & Grammar",
                "Clarity",
                "Engagement"
            ]
        );
    }
}
