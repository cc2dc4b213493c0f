//! Deciding which notes take part in a comparison
//!
//! Suspended cards normally drop out, except those sitting in late
//! curriculum lessons that the learner has not unlocked yet.

use std::sync::OnceLock;

use regex::Regex;

use super::models::{CardPlacement, Collection, Note};
use crate::config::CurriculumConfig;

fn lesson_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Lesson ([0-9]+)").expect("valid lesson regex"))
}

#[derive(Debug, Clone)]
pub struct SuspensionPolicy {
    marker: String,
    min_lesson: u32,
}

impl SuspensionPolicy {
    pub fn new(marker: impl Into<String>, min_lesson: u32) -> Self {
        Self {
            marker: marker.into(),
            min_lesson,
        }
    }

    pub fn from_config(config: &CurriculumConfig) -> Self {
        Self::new(config.marker.clone(), config.min_retained_lesson)
    }

    /// Keep when any card is active, or when a suspended card is in a
    /// curriculum deck at or past the minimum lesson.
    pub fn should_keep(&self, placements: &[CardPlacement]) -> bool {
        placements
            .iter()
            .any(|card| !card.suspended || self.is_late_lesson(&card.deck_name))
    }

    /// Whether the deck belongs to the curriculum at or past the minimum lesson.
    ///
    /// Only ASCII lesson numbers count: "Lesson １０" is not a late lesson.
    pub fn is_late_lesson(&self, deck_name: &str) -> bool {
        if !deck_name.contains(&self.marker) {
            return false;
        }

        lesson_number_regex()
            .captures(deck_name)
            .is_some_and(|caps| match caps[1].parse::<u64>() {
                Ok(lesson) => lesson >= u64::from(self.min_lesson),
                // Digits only, so the sole failure is overflow: past any threshold.
                Err(_) => true,
            })
    }

    /// Notes of the collection that survive, in note id order
    pub fn retain<'a>(&self, collection: &'a Collection) -> Vec<&'a Note> {
        let kept: Vec<&Note> = collection
            .notes()
            .filter(|note| self.should_keep(collection.placements(note.id)))
            .collect();

        log::debug!(
            "Suspension filter kept {} of {} notes",
            kept.len(),
            collection.note_count()
        );
        kept
    }
}

impl Default for SuspensionPolicy {
    fn default() -> Self {
        Self::from_config(&CurriculumConfig::default())
    }
}
