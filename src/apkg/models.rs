//! Records read from an Anki collection database

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// Queue value Anki uses for suspended cards
pub const SUSPENDED_QUEUE: i64 = -1;

/// A note row. `fields` is still packed with the field separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub guid: String,
    pub model_id: i64,
    pub tags: String,
    pub fields: String,
}

/// A card row, before its deck id is resolved to a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRow {
    pub note_id: i64,
    pub deck_id: i64,
    pub queue: i64,
}

impl CardRow {
    pub fn is_suspended(&self) -> bool {
        self.queue == SUSPENDED_QUEUE
    }
}

/// Where one card of a note lives and whether it is suspended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPlacement {
    pub deck_name: String,
    pub suspended: bool,
}

impl CardPlacement {
    pub fn new(deck_name: impl Into<String>, suspended: bool) -> Self {
        Self {
            deck_name: deck_name.into(),
            suspended,
        }
    }
}

/// One value of the `col.decks` JSON object. Only the name is used.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckMeta {
    pub name: String,
}

/// All notes of a package plus the decks their cards sit in.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub(crate) notes: BTreeMap<i64, Note>,
    pub(crate) placements: HashMap<i64, Vec<CardPlacement>>,
    pub(crate) deck_names: BTreeMap<i64, String>,
}

impl Collection {
    /// Notes in ascending id order
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    pub fn note(&self, id: i64) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn card_count(&self) -> usize {
        self.placements.values().map(Vec::len).sum()
    }

    /// Cards of a note in card id order; empty for notes without cards
    pub fn placements(&self, note_id: i64) -> &[CardPlacement] {
        self.placements
            .get(&note_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Deck of the note's first card, or "" when it has none
    pub fn deck_name_of(&self, note_id: i64) -> &str {
        self.placements(note_id)
            .first()
            .map(|p| p.deck_name.as_str())
            .unwrap_or("")
    }

    /// Every card of the collection, in no particular note order
    pub fn all_placements(&self) -> impl Iterator<Item = &CardPlacement> {
        self.placements.values().flatten()
    }

    /// Deck names by id, as decoded from the collection config
    pub fn deck_names(&self) -> &BTreeMap<i64, String> {
        &self.deck_names
    }
}
