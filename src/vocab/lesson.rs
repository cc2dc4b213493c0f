//! Mapping deck names to curriculum lesson labels

use regex::Regex;

use super::models::LessonLabel;
use crate::config::CurriculumConfig;

/// Recognizes names like "Genki Lesson-1", "genki lesson 1" or "GENKI LESSON1".
#[derive(Debug, Clone)]
pub struct LessonClassifier {
    pattern: Regex,
    label_prefix: String,
}

impl LessonClassifier {
    pub fn new(config: &CurriculumConfig) -> Result<Self, regex::Error> {
        let marker = regex::escape(&config.marker.trim().to_lowercase());
        let pattern = Regex::new(&format!(r"{}[\s\-]?lesson[\s\-]?(\d+)", marker))?;

        Ok(Self {
            pattern,
            label_prefix: config.label_prefix.clone(),
        })
    }

    /// Normalized label, or `None` when the name follows no lesson convention
    pub fn classify(&self, deck_name: &str) -> Option<LessonLabel> {
        let normalized = deck_name.trim().to_lowercase();
        let caps = self.pattern.captures(&normalized)?;
        let number = &caps[1];

        Some(LessonLabel::new(format!(
            "{}::Lesson {:0>2}",
            self.label_prefix, number
        )))
    }

    /// Like `classify`, falling back to the "Unknown" bucket
    pub fn classify_or_unknown(&self, deck_name: &str) -> LessonLabel {
        self.classify(deck_name).unwrap_or_else(LessonLabel::unknown)
    }
}

impl Default for LessonClassifier {
    fn default() -> Self {
        Self::new(&CurriculumConfig::default()).expect("default curriculum pattern is valid")
    }
}
