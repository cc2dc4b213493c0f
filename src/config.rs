//! Comparison settings, loaded from an optional TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "vocab-diff";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Everything a comparison run can be tuned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// How the reference curriculum names its decks
    pub curriculum: CurriculumConfig,
    /// Where term and reading live in primary-deck notes
    pub primary_fields: FieldMapping,
    /// Where the question lives in reference-deck notes
    pub reference_fields: QuestionField,
    /// Number of words shown per lesson in the console summary
    pub preview_limit: usize,
    /// Destination of the full JSON results
    pub output_path: PathBuf,
    /// Database entry names to look for inside a package, first match wins
    pub collection_entries: Vec<String>,
    /// Directory for the temporary extracted database (system temp dir if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_dir: Option<PathBuf>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            curriculum: CurriculumConfig::default(),
            primary_fields: FieldMapping::default(),
            reference_fields: QuestionField::default(),
            preview_limit: 5,
            output_path: PathBuf::from("out/vocab_diff_results.json"),
            collection_entries: vec![
                "collection.anki21".to_string(),
                "collection.anki2".to_string(),
            ],
            extract_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumConfig {
    /// Text every reference deck name carries, e.g. "Genki"
    pub marker: String,
    /// Prefix of normalized lesson labels, e.g. "Genki 1"
    pub label_prefix: String,
    /// Suspended cards in lessons at or above this number still count
    pub min_retained_lesson: u32,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            marker: "Genki".to_string(),
            label_prefix: "Genki 1".to_string(),
            min_retained_lesson: 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    pub term_field: usize,
    pub reading_field: usize,
}

impl FieldMapping {
    /// Fewest fields a note needs for both indexes to exist
    pub fn required_fields(&self) -> usize {
        self.term_field.max(self.reading_field) + 1
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            term_field: 0,
            reading_field: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionField {
    pub question_field: usize,
}

impl QuestionField {
    pub fn required_fields(&self) -> usize {
        self.question_field + 1
    }
}

impl CompareConfig {
    /// Default config file location (`<config dir>/vocab-diff/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    /// Resolve the active config: an explicit path must exist, the default
    /// path is used only when present, otherwise built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Using config file {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
