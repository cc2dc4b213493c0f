//! Turning retained notes into vocabulary

use std::collections::BTreeMap;

use super::fields::split_fields;
use super::lesson::LessonClassifier;
use super::models::{LessonLabel, VocabEntry, VocabSet};
use super::ruby::normalize_ruby;
use crate::apkg::{Collection, Note};
use crate::config::{FieldMapping, QuestionField};

/// Vocabulary of the primary study deck
#[derive(Debug, Clone, Default)]
pub struct ParsedPrimary {
    pub vocab: VocabSet,
    /// Notes with too few fields
    pub skipped: usize,
}

/// Vocabulary of the reference curriculum, bucketed by lesson
#[derive(Debug, Clone, Default)]
pub struct ParsedReference {
    pub lessons: BTreeMap<LessonLabel, Vec<VocabEntry>>,
    /// Notes with too few fields
    pub skipped: usize,
    /// Notes whose deck matched no lesson and went to "Unknown"
    pub unmatched: usize,
}

impl ParsedReference {
    pub fn entry_count(&self) -> usize {
        self.lessons.values().map(Vec::len).sum()
    }
}

/// Read plain term/reading fields from primary-deck notes.
pub fn parse_primary_deck<'a, I>(notes: I, mapping: &FieldMapping) -> ParsedPrimary
where
    I: IntoIterator<Item = &'a Note>,
{
    let required = mapping.required_fields();
    let mut parsed = ParsedPrimary::default();

    for note in notes {
        let fields = split_fields(&note.fields);
        if fields.len() < required {
            log::debug!(
                "Skipping note {}: {} field(s), need {}",
                note.id,
                fields.len(),
                required
            );
            parsed.skipped += 1;
            continue;
        }

        parsed.vocab.insert(VocabEntry::new(
            fields[mapping.term_field].clone(),
            fields[mapping.reading_field].clone(),
        ));
    }

    parsed
}

/// Normalize the ruby question of each reference note and file it under the
/// lesson of the deck its first card sits in.
pub fn parse_reference_deck<'a, I>(
    notes: I,
    collection: &Collection,
    classifier: &LessonClassifier,
    question: &QuestionField,
) -> ParsedReference
where
    I: IntoIterator<Item = &'a Note>,
{
    let required = question.required_fields();
    let mut parsed = ParsedReference::default();

    for note in notes {
        let fields = split_fields(&note.fields);
        if fields.len() < required {
            log::debug!(
                "Skipping note {}: {} field(s), need {}",
                note.id,
                fields.len(),
                required
            );
            parsed.skipped += 1;
            continue;
        }

        let deck_name = collection.deck_name_of(note.id);
        let lesson = match classifier.classify(deck_name) {
            Some(lesson) => lesson,
            None => {
                log::debug!("Deck {:?} of note {} matches no lesson", deck_name, note.id);
                parsed.unmatched += 1;
                LessonLabel::unknown()
            }
        };

        let entry = normalize_ruby(&fields[question.question_field]);
        parsed.lessons.entry(lesson).or_default().push(entry);
    }

    parsed
}
