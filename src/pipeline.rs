//! End-to-end comparison of two packages
//!
//! Each package is unpacked, loaded and closed again before any parsing
//! happens, so the extracted database never outlives `load_deck`.

use std::path::Path;

use serde::Serialize;

use crate::apkg::{
    self, Collection, DatabaseError, ExtractOptions, ExtractedCollection, ImportError,
    SuspensionPolicy,
};
use crate::config::CompareConfig;
use crate::vocab::{
    compare_vocab, parse_primary_deck, parse_reference_deck, LessonClassifier, VocabDiff,
};

/// Counts reported for one side of the comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    pub total_notes: usize,
    pub retained_notes: usize,
    pub parsed_entries: usize,
    /// Notes with too few fields
    pub skipped_notes: usize,
    /// Notes filed under "Unknown" (reference deck only)
    pub unmatched_notes: usize,
}

#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub primary: DeckStats,
    pub reference: DeckStats,
    pub diff: VocabDiff,
}

/// Read a package into memory. The temp database is removed before this
/// returns, whether loading succeeded or not.
pub fn load_deck(path: &Path, config: &CompareConfig) -> Result<Collection, ImportError> {
    let extracted = apkg::open_package(path, &ExtractOptions::from(config))?;
    let loaded = apkg::load_collection(extracted.connection());
    close_after_load(extracted, loaded)
}

/// Remove the extracted database. A load failure wins over a close failure,
/// which is then only logged.
fn close_after_load(
    extracted: ExtractedCollection,
    loaded: Result<Collection, DatabaseError>,
) -> Result<Collection, ImportError> {
    let closed = extracted.close();
    match loaded {
        Ok(collection) => {
            closed?;
            Ok(collection)
        }
        Err(e) => {
            if let Err(close_error) = closed {
                log::warn!("Failed to remove extracted collection: {}", close_error);
            }
            Err(e.into())
        }
    }
}

/// Compare a primary study deck against a reference curriculum deck.
pub fn compare_packages(
    primary_path: &Path,
    reference_path: &Path,
    config: &CompareConfig,
) -> Result<ComparisonRun, ImportError> {
    let policy = SuspensionPolicy::from_config(&config.curriculum);
    let classifier = LessonClassifier::new(&config.curriculum)?;

    log::info!("Loading primary deck {:?}", primary_path);
    let primary_collection = load_deck(primary_path, config)?;
    let primary_notes = policy.retain(&primary_collection);
    let primary = parse_primary_deck(primary_notes.iter().copied(), &config.primary_fields);

    log::info!("Loading reference deck {:?}", reference_path);
    let reference_collection = load_deck(reference_path, config)?;
    let reference_notes = policy.retain(&reference_collection);
    let reference = parse_reference_deck(
        reference_notes.iter().copied(),
        &reference_collection,
        &classifier,
        &config.reference_fields,
    );

    let diff = compare_vocab(&primary.vocab, &reference.lessons);

    Ok(ComparisonRun {
        primary: DeckStats {
            total_notes: primary_collection.note_count(),
            retained_notes: primary_notes.len(),
            parsed_entries: primary.vocab.len(),
            skipped_notes: primary.skipped,
            unmatched_notes: 0,
        },
        reference: DeckStats {
            total_notes: reference_collection.note_count(),
            retained_notes: reference_notes.len(),
            parsed_entries: reference.entry_count(),
            skipped_notes: reference.skipped,
            unmatched_notes: reference.unmatched,
        },
        diff,
    })
}
