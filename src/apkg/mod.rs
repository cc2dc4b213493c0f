//! Anki package (`.apkg`) reading
//!
//! This module provides:
//! - Extraction of the collection database into a scoped temp file
//! - Loading notes, cards and deck names into typed records
//! - The suspension filter deciding which notes are compared

pub mod archive;
pub mod collection;
mod errors;
pub mod filter;
mod models;

pub use archive::{open_package, ExtractOptions, ExtractedCollection};
pub use collection::load_collection;
pub use errors::{ArchiveError, DatabaseError, ImportError};
pub use filter::SuspensionPolicy;
pub use models::*;
