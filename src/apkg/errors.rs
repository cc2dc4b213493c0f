//! Error types for reading Anki packages

use std::path::PathBuf;

use thiserror::Error;

/// The package file itself could not be unpacked.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Package not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Package {path:?} has no collection database (expected one of: {expected})")]
    MissingCollection { path: PathBuf, expected: String },
}

/// The extracted collection database is unreadable or malformed.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Deck metadata is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Collection has no configuration row")]
    MissingConfig,

    #[error("Deck id is not numeric: {0:?}")]
    InvalidDeckId(String),
}

/// Any failure while turning packages into compared vocabulary.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Invalid curriculum pattern: {0}")]
    Curriculum(#[from] regex::Error),
}
