//! Console summary data and the JSON results file

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::vocab::{LessonLabel, VocabDiff, VocabEntry};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Missing words of one lesson, trimmed to a preview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonSummary {
    pub lesson: LessonLabel,
    pub count: usize,
    pub preview: Vec<String>,
    /// Words left out of the preview
    pub remaining: usize,
}

/// What the console shows after a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub lessons: Vec<LessonSummary>,
    pub total_missing: usize,
    pub total_extras: usize,
    pub extras_preview: Vec<String>,
    pub extras_remaining: usize,
}

fn preview(entries: &[VocabEntry], limit: usize) -> (Vec<String>, usize) {
    let words = entries
        .iter()
        .take(limit)
        .map(|entry| entry.term.clone())
        .collect();
    (words, entries.len().saturating_sub(limit))
}

impl Summary {
    pub fn from_diff(diff: &VocabDiff, preview_limit: usize) -> Self {
        let lessons: Vec<LessonSummary> = diff
            .missing_by_lesson
            .iter()
            .map(|(lesson, entries)| {
                let (words, remaining) = preview(entries, preview_limit);
                LessonSummary {
                    lesson: lesson.clone(),
                    count: entries.len(),
                    preview: words,
                    remaining,
                }
            })
            .collect();

        let (extras_preview, extras_remaining) = preview(&diff.extras, preview_limit);

        Self {
            total_missing: lessons.iter().map(|l| l.count).sum(),
            lessons,
            total_extras: diff.extras.len(),
            extras_preview,
            extras_remaining,
        }
    }
}

/// Write the full comparison as pretty JSON, creating parent directories.
/// Returns the absolute path written.
pub fn write_results(diff: &VocabDiff, path: &Path) -> Result<PathBuf, ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(diff)?;
    fs::write(path, json)?;
    log::info!("Wrote results to {:?}", path);

    Ok(fs::canonicalize(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_diff() -> VocabDiff {
        let mut missing_by_lesson = BTreeMap::new();
        missing_by_lesson.insert(
            LessonLabel::new("Genki 1::Lesson 02"),
            vec![
                VocabEntry::new("一", "いち"),
                VocabEntry::new("二", "に"),
                VocabEntry::new("三", "さん"),
            ],
        );
        missing_by_lesson.insert(
            LessonLabel::new("Genki 1::Lesson 01"),
            vec![VocabEntry::new("鳥", "とり")],
        );
        VocabDiff {
            missing_by_lesson,
            extras: vec![VocabEntry::new("犬", ""), VocabEntry::new("馬", "うま")],
        }
    }

    #[test]
    fn test_summary_previews() {
        let summary = Summary::from_diff(&sample_diff(), 2);

        assert_eq!(summary.total_missing, 4);
        assert_eq!(summary.lessons.len(), 2);
        assert_eq!(summary.lessons[0].lesson.as_str(), "Genki 1::Lesson 01");
        assert_eq!(summary.lessons[0].preview, vec!["鳥"]);
        assert_eq!(summary.lessons[0].remaining, 0);
        assert_eq!(summary.lessons[1].count, 3);
        assert_eq!(summary.lessons[1].preview, vec!["一", "二"]);
        assert_eq!(summary.lessons[1].remaining, 1);

        assert_eq!(summary.total_extras, 2);
        assert_eq!(summary.extras_preview, vec!["犬", "馬"]);
        assert_eq!(summary.extras_remaining, 0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_diff(&VocabDiff::default(), 5);
        assert!(summary.lessons.is_empty());
        assert_eq!(summary.total_missing, 0);
        assert_eq!(summary.total_extras, 0);
        assert!(summary.extras_preview.is_empty());
    }

    #[test]
    fn test_write_results_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("vocab_diff_results.json");

        let written = write_results(&sample_diff(), &path).unwrap();
        assert!(written.is_absolute());

        let content = fs::read_to_string(&path).unwrap();
        // Non-ASCII text is written as-is with two-space indentation
        assert!(content.contains("\"Word\": \"鳥\""));
        assert!(content.starts_with("{\n  \"missing_by_lesson\""));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["extra_vocab"][1]["Reading"], "うま");
        assert_eq!(
            value["missing_by_lesson"]["Genki 1::Lesson 02"]
                .as_array()
                .map(Vec::len),
            Some(3)
        );

        let round_trip: VocabDiff = serde_json::from_str(&content).unwrap();
        assert_eq!(round_trip, sample_diff());
    }
}
