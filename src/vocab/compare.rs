//! Missing and extra vocabulary between the two decks

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::models::{LessonLabel, VocabEntry, VocabSet};

/// Result of a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabDiff {
    /// Reference entries absent from the primary deck, per lesson
    pub missing_by_lesson: BTreeMap<LessonLabel, Vec<VocabEntry>>,
    /// Primary entries that no reference entry matched
    #[serde(rename = "extra_vocab")]
    pub extras: Vec<VocabEntry>,
}

impl VocabDiff {
    pub fn total_missing(&self) -> usize {
        self.missing_by_lesson.values().map(Vec::len).sum()
    }
}

/// Whether the primary deck holds the exact pair, the term with no reading,
/// or the reading with no term.
fn is_covered(primary: &VocabSet, entry: &VocabEntry) -> bool {
    primary.contains(entry)
        || primary.contains(&entry.term_only())
        || primary.contains(&entry.reading_only())
}

/// Compare the primary vocabulary against every reference lesson.
///
/// Lessons are visited in label order and entries in reference order. Covered
/// reference entries are recorded as found, and a primary entry is an extra
/// unless it equals one of them. A term-only primary entry that covered a
/// reference pair is therefore still reported as an extra.
pub fn compare_vocab(
    primary: &VocabSet,
    reference: &BTreeMap<LessonLabel, Vec<VocabEntry>>,
) -> VocabDiff {
    let mut missing_by_lesson: BTreeMap<LessonLabel, Vec<VocabEntry>> = BTreeMap::new();
    let mut found: HashSet<&VocabEntry> = HashSet::new();

    for (lesson, entries) in reference {
        for entry in entries {
            if is_covered(primary, entry) {
                found.insert(entry);
            } else {
                missing_by_lesson
                    .entry(lesson.clone())
                    .or_default()
                    .push(entry.clone());
            }
        }
    }

    let extras = primary
        .iter()
        .filter(|entry| !found.contains(entry))
        .cloned()
        .collect();

    VocabDiff {
        missing_by_lesson,
        extras,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons(items: Vec<(&str, Vec<VocabEntry>)>) -> BTreeMap<LessonLabel, Vec<VocabEntry>> {
        items
            .into_iter()
            .map(|(label, entries)| (LessonLabel::new(label), entries))
            .collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let primary: VocabSet = vec![VocabEntry::new("猫", "ねこ"), VocabEntry::new("犬", "")]
            .into_iter()
            .collect();
        let reference = lessons(vec![(
            "L1",
            vec![VocabEntry::new("猫", "ねこ"), VocabEntry::new("鳥", "とり")],
        )]);

        let diff = compare_vocab(&primary, &reference);

        assert_eq!(diff.missing_by_lesson.len(), 1);
        assert_eq!(
            diff.missing_by_lesson[&LessonLabel::new("L1")],
            vec![VocabEntry::new("鳥", "とり")]
        );
        assert_eq!(diff.extras, vec![VocabEntry::new("犬", "")]);

        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "missing_by_lesson": { "L1": [{ "Word": "鳥", "Reading": "とり" }] },
                "extra_vocab": [{ "Word": "犬", "Reading": "" }]
            })
        );
    }

    #[test]
    fn test_term_only_match() {
        let primary: VocabSet = vec![VocabEntry::new("猫", "")].into_iter().collect();
        let reference = lessons(vec![("L1", vec![VocabEntry::new("猫", "neko")])]);

        let diff = compare_vocab(&primary, &reference);
        assert_eq!(diff.total_missing(), 0);
        // Covering a reference pair does not make the partial entry found
        assert_eq!(diff.extras, vec![VocabEntry::new("猫", "")]);
    }

    #[test]
    fn test_reading_only_match() {
        let primary: VocabSet = vec![VocabEntry::new("", "neko")].into_iter().collect();
        let reference = lessons(vec![("L1", vec![VocabEntry::new("猫", "neko")])]);

        let diff = compare_vocab(&primary, &reference);
        assert_eq!(diff.total_missing(), 0);
        assert_eq!(diff.extras, vec![VocabEntry::new("", "neko")]);
    }

    #[test]
    fn test_partial_entry_beside_exact_pair_stays_extra() {
        let primary: VocabSet = vec![VocabEntry::new("猫", "ねこ"), VocabEntry::new("猫", "")]
            .into_iter()
            .collect();
        let reference = lessons(vec![("L1", vec![VocabEntry::new("猫", "ねこ")])]);

        let diff = compare_vocab(&primary, &reference);
        assert!(diff.missing_by_lesson.is_empty());
        assert_eq!(diff.extras, vec![VocabEntry::new("猫", "")]);
    }

    #[test]
    fn test_different_reading_is_missing() {
        let primary: VocabSet = vec![VocabEntry::new("猫", "びょう")].into_iter().collect();
        let reference = lessons(vec![("L1", vec![VocabEntry::new("猫", "ねこ")])]);

        let diff = compare_vocab(&primary, &reference);
        assert_eq!(diff.total_missing(), 1);
        assert_eq!(diff.extras, vec![VocabEntry::new("猫", "びょう")]);
    }

    #[test]
    fn test_found_in_any_lesson_is_not_extra() {
        let primary: VocabSet = vec![
            VocabEntry::new("先生", "せんせい"),
            VocabEntry::new("学生", "がくせい"),
            VocabEntry::new("電車", "でんしゃ"),
        ]
        .into_iter()
        .collect();
        let reference = lessons(vec![
            ("Genki 1::Lesson 10", vec![VocabEntry::new("電車", "でんしゃ")]),
            ("Genki 1::Lesson 01", vec![VocabEntry::new("先生", "せんせい")]),
        ]);

        let diff = compare_vocab(&primary, &reference);
        assert!(diff.missing_by_lesson.is_empty());
        assert_eq!(diff.extras, vec![VocabEntry::new("学生", "がくせい")]);
    }

    #[test]
    fn test_lessons_sorted_and_order_preserved() {
        let primary = VocabSet::new();
        let reference = lessons(vec![
            ("Unknown", vec![VocabEntry::new("ええ", "ええ")]),
            (
                "Genki 1::Lesson 02",
                vec![VocabEntry::new("b", "b"), VocabEntry::new("a", "a")],
            ),
            ("Genki 1::Lesson 01", vec![VocabEntry::new("c", "c")]),
        ]);

        let diff = compare_vocab(&primary, &reference);
        let labels: Vec<&str> = diff.missing_by_lesson.keys().map(LessonLabel::as_str).collect();
        assert_eq!(labels, vec!["Genki 1::Lesson 01", "Genki 1::Lesson 02", "Unknown"]);
        assert_eq!(
            diff.missing_by_lesson[&LessonLabel::new("Genki 1::Lesson 02")],
            vec![VocabEntry::new("b", "b"), VocabEntry::new("a", "a")]
        );
        assert_eq!(diff.total_missing(), 4);
    }

    #[test]
    fn test_missing_entries_never_count_as_found() {
        let primary: VocabSet = vec![VocabEntry::new("犬", "いぬ")].into_iter().collect();
        let reference = lessons(vec![(
            "L1",
            vec![VocabEntry::new("犬", "いぬ"), VocabEntry::new("鳥", "とり")],
        )]);

        let diff = compare_vocab(&primary, &reference);
        let missing = &diff.missing_by_lesson[&LessonLabel::new("L1")];
        for entry in missing {
            assert!(!primary.contains(entry));
        }
        assert!(!missing.contains(&VocabEntry::new("犬", "いぬ")));
    }
}
