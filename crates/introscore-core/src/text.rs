//! Transcript preprocessing: tokenization and sentence splitting

use std::sync::OnceLock;

use regex::Regex;

/// Word tokens are contiguous alphanumeric/underscore runs
static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Sentences split on any run of `.`, `!`, `?`
static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("valid word regex"))
}

fn sentence_re() -> &'static Regex {
    SENTENCE_RE.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence regex"))
}

/// Immutable, derived view of one transcript.
///
/// Built once per scoring call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    /// Transcript with surrounding whitespace trimmed
    pub text: String,
    /// Lowercased form of `text`
    pub lowered: String,
    /// Lowercase word tokens in order of appearance
    pub tokens: Vec<String>,
    /// Number of word tokens
    pub word_count: usize,
    /// Trimmed, non-empty sentence fragments
    pub sentences: Vec<String>,
    /// Number of sentences
    pub sentence_count: usize,
}

/// Normalize a raw transcript into tokens, sentences, and counts.
///
/// Empty or whitespace-only input yields zero tokens and zero sentences;
/// downstream scorers must not assume a non-zero word count.
pub fn preprocess(raw: &str) -> Preprocessed {
    let text = raw.trim().to_string();
    let lowered = text.to_lowercase();

    let tokens: Vec<String> = word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect();

    let sentences: Vec<String> = sentence_re()
        .split(&text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let word_count = tokens.len();
    let sentence_count = sentences.len();

    Preprocessed {
        text,
        lowered,
        tokens,
        word_count,
        sentences,
        sentence_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_basic() {
        let pp = preprocess("Hello everyone. My name is Asha!");
        assert_eq!(
            pp.tokens,
            vec!["hello", "everyone", "my", "name", "is", "asha"]
        );
        assert_eq!(pp.word_count, 6);
        assert_eq!(pp.sentences, vec!["Hello everyone", "My name is Asha"]);
        assert_eq!(pp.sentence_count, 2);
    }

    #[test]
    fn test_preprocess_trims_whitespace() {
        let pp = preprocess("   Hi there.   ");
        assert_eq!(pp.text, "Hi there.");
        assert_eq!(pp.lowered, "hi there.");
    }

    #[test]
    fn test_preprocess_empty_transcript() {
        let pp = preprocess("");
        assert_eq!(pp.word_count, 0);
        assert_eq!(pp.sentence_count, 0);
        assert!(pp.tokens.is_empty());
        assert!(pp.sentences.is_empty());
    }

    #[test]
    fn test_preprocess_whitespace_only() {
        let pp = preprocess("  \n\t ");
        assert_eq!(pp.word_count, 0);
        assert_eq!(pp.sentence_count, 0);
    }

    #[test]
    fn test_preprocess_punctuation_runs_split_once() {
        let pp = preprocess("Wow!!! That was great... right?");
        assert_eq!(pp.sentences, vec!["Wow", "That was great", "right"]);
        assert_eq!(pp.sentence_count, 3);
    }

    #[test]
    fn test_preprocess_tokens_strip_punctuation() {
        let pp = preprocess("I'm twelve years old, really.");
        // Apostrophe splits "I'm" into two tokens, commas are dropped
        assert_eq!(pp.tokens, vec!["i", "m", "twelve", "years", "old", "really"]);
    }

    #[test]
    fn test_preprocess_numbers_are_tokens() {
        let pp = preprocess("I am 12 years old");
        assert!(pp.tokens.contains(&"12".to_string()));
        assert_eq!(pp.word_count, 5);
    }

    #[test]
    fn test_preprocess_no_terminal_punctuation() {
        let pp = preprocess("hello everyone my name is Ben");
        assert_eq!(pp.sentence_count, 1);
        assert_eq!(pp.sentences[0], "hello everyone my name is Ben");
    }
}
