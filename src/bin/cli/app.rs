use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vocab_diff_lib::apkg::{Collection, SuspensionPolicy};
use vocab_diff_lib::vocab::{LessonClassifier, VocabDiff};
use vocab_diff_lib::{compare_packages, load_deck, write_results, CompareConfig, ComparisonRun};

/// Shared state for CLI commands
pub struct App {
    pub config: CompareConfig,
}

impl App {
    /// Load the explicit config file, else the default one, else built-in defaults
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = CompareConfig::resolve(config_path)
            .context("Failed to load configuration")?;
        Ok(Self { config })
    }

    /// Command-line flags win over the config file
    pub fn apply_overrides(&mut self, output: Option<PathBuf>, preview: Option<usize>) {
        if let Some(output) = output {
            self.config.output_path = output;
        }
        if let Some(preview) = preview {
            self.config.preview_limit = preview;
        }
    }

    pub fn compare(&self, primary: &Path, reference: &Path) -> Result<ComparisonRun> {
        compare_packages(primary, reference, &self.config).with_context(|| {
            format!(
                "Failed to compare {} against {}",
                primary.display(),
                reference.display()
            )
        })
    }

    pub fn load(&self, package: &Path) -> Result<Collection> {
        load_deck(package, &self.config)
            .with_context(|| format!("Failed to read {}", package.display()))
    }

    pub fn save_results(&self, diff: &VocabDiff) -> Result<PathBuf> {
        let path = &self.config.output_path;
        write_results(diff, path)
            .with_context(|| format!("Failed to write results to {}", path.display()))
    }

    pub fn policy(&self) -> SuspensionPolicy {
        SuspensionPolicy::from_config(&self.config.curriculum)
    }

    pub fn classifier(&self) -> Result<LessonClassifier> {
        LessonClassifier::new(&self.config.curriculum)
            .context("Invalid curriculum marker")
    }
}
