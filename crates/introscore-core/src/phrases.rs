//! Phrase tables used by the criterion scorers
//!
//! All pattern sets are immutable configuration data. The built-in defaults
//! cover the standard self-introduction rubric; alternate sets can be loaded
//! from a TOML file, which keeps the scorers testable against other phrase
//! vocabularies.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Number of required-info topical blocks
pub const INFO_BLOCK_COUNT: usize = 7;

fn default_greetings() -> Vec<String> {
    to_vec(&[
        "hello everyone",
        "hello",
        "hi",
        "good morning",
        "good afternoon",
        "good evening",
    ])
}

fn default_name() -> Vec<String> {
    to_vec(&["my name is", "myself", "i am"])
}

fn default_age() -> Vec<String> {
    to_vec(&["years old"])
}

fn default_school() -> Vec<String> {
    to_vec(&["school", "class", "grade"])
}

fn default_family() -> Vec<String> {
    to_vec(&["family", "father", "mother", "parents", "sister", "brother"])
}

fn default_hobby() -> Vec<String> {
    to_vec(&[
        "hobby",
        "hobbies",
        "enjoy",
        "i like",
        "i love",
        "in my free time",
    ])
}

fn default_goal() -> Vec<String> {
    to_vec(&["goal", "dream", "ambition", "i want to be"])
}

fn default_unique() -> Vec<String> {
    to_vec(&["special", "unique", "fun fact", "one thing about me"])
}

fn default_closings() -> Vec<String> {
    to_vec(&["thank you", "thanks for listening", "thank you for listening"])
}

fn default_fillers() -> Vec<String> {
    to_vec(&[
        "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
        "kinda", "sort of", "okay", "hmm", "ah",
    ])
}

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fixed phrase-pattern tables for the content, flow, and filler scorers.
///
/// All phrases are matched as lowercase substrings of the lowered transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhraseBook {
    /// Greeting phrases (salutation + flow anchor)
    pub greetings: Vec<String>,
    /// Name-introduction phrases (info block + flow anchor)
    pub name: Vec<String>,
    /// Age phrases
    pub age: Vec<String>,
    /// School phrases
    pub school: Vec<String>,
    /// Family phrases
    pub family: Vec<String>,
    /// Hobby phrases
    pub hobby: Vec<String>,
    /// Goal/ambition phrases
    pub goal: Vec<String>,
    /// Unique-fact phrases
    pub unique: Vec<String>,
    /// Closing phrases (flow anchor)
    pub closings: Vec<String>,
    /// Filler terms, some multi-word
    pub fillers: Vec<String>,
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            greetings: default_greetings(),
            name: default_name(),
            age: default_age(),
            school: default_school(),
            family: default_family(),
            hobby: default_hobby(),
            goal: default_goal(),
            unique: default_unique(),
            closings: default_closings(),
            fillers: default_fillers(),
        }
    }
}

impl PhraseBook {
    /// Load an alternate phrase book from a TOML file.
    ///
    /// Missing tables fall back to the built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScoreError::InvalidPhraseFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The seven required-info topical blocks, in rubric order:
    /// name, age, school, family, hobby, goal, unique-fact.
    pub fn info_blocks(&self) -> [&[String]; INFO_BLOCK_COUNT] {
        [
            &self.name,
            &self.age,
            &self.school,
            &self.family,
            &self.hobby,
            &self.goal,
            &self.unique,
        ]
    }
}

/// True if the lowered text contains any phrase from the set
pub fn has_any(lowered: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| lowered.contains(p.as_str()))
}

/// Earliest match position of any phrase from the set, or `None` if absent
pub fn first_position(lowered: &str, phrases: &[String]) -> Option<usize> {
    phrases.iter().filter_map(|p| lowered.find(p.as_str())).min()
}
