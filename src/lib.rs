//! Vocabulary coverage between two Anki deck exports.
//!
//! Provides:
//! - `.apkg` extraction and note/card loading with a suspension filter
//! - Ruby (furigana) normalization and lesson labelling of reference decks
//! - The missing/extra comparison and its JSON report

pub mod apkg;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod vocab;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::CompareConfig;
pub use pipeline::{compare_packages, load_deck, ComparisonRun, DeckStats};
pub use report::{write_results, ReportError, Summary};
pub use vocab::{VocabDiff, VocabEntry};
