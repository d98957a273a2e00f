//! Introscore Core Library
//!
//! Scoring engine for spoken self-introduction transcripts: text
//! preprocessing, rubric loading, criterion scorers, and weighted
//! aggregation.

pub mod dictionary;
pub mod error;
pub mod logging;
pub mod phrases;
pub mod rubric;
pub mod score;
pub mod sentiment;
pub mod text;
