//! Vocabulary extraction and comparison
//!
//! This module provides:
//! - Field splitting for packed note fields
//! - Ruby (furigana) HTML normalization into (term, reading)
//! - Lesson labels derived from deck names
//! - Primary/reference deck parsing and the coverage comparison

pub mod compare;
pub mod decks;
pub mod fields;
pub mod lesson;
mod models;
pub mod ruby;

pub use compare::{compare_vocab, VocabDiff};
pub use decks::{parse_primary_deck, parse_reference_deck, ParsedPrimary, ParsedReference};
pub use fields::{split_fields, FIELD_SEPARATOR};
pub use lesson::LessonClassifier;
pub use models::*;
pub use ruby::normalize_ruby;
