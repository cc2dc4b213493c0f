//! Vocabulary entries and lesson labels

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A (term, reading) pair. The reading may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VocabEntry {
    #[serde(rename = "Word")]
    pub term: String,
    #[serde(rename = "Reading")]
    pub reading: String,
}

impl VocabEntry {
    pub fn new(term: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            reading: reading.into(),
        }
    }

    /// Same term with no reading
    pub fn term_only(&self) -> Self {
        Self::new(self.term.clone(), "")
    }

    /// Same reading with no term
    pub fn reading_only(&self) -> Self {
        Self::new("", self.reading.clone())
    }
}

impl fmt::Display for VocabEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reading.is_empty() || self.reading == self.term {
            write!(f, "{}", self.term)
        } else {
            write!(f, "{} [{}]", self.term, self.reading)
        }
    }
}

/// Insertion-ordered set of entries
#[derive(Debug, Clone, Default)]
pub struct VocabSet {
    entries: Vec<VocabEntry>,
    index: HashSet<VocabEntry>,
}

impl VocabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the entry was already present
    pub fn insert(&mut self, entry: VocabEntry) -> bool {
        if self.index.contains(&entry) {
            return false;
        }
        self.index.insert(entry.clone());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, entry: &VocabEntry) -> bool {
        self.index.contains(entry)
    }

    /// The stored entry equal to `entry`, if any
    pub fn get(&self, entry: &VocabEntry) -> Option<&VocabEntry> {
        self.index.get(entry)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<VocabEntry> for VocabSet {
    fn from_iter<I: IntoIterator<Item = VocabEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

impl<'a> IntoIterator for &'a VocabSet {
    type Item = &'a VocabEntry;
    type IntoIter = std::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

const UNKNOWN_LESSON: &str = "Unknown";

/// Normalized curriculum unit, e.g. "Genki 1::Lesson 03"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonLabel(String);

impl LessonLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Bucket for decks that follow no lesson naming convention
    pub fn unknown() -> Self {
        Self(UNKNOWN_LESSON.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_LESSON
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LessonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
