//! Unpacking the collection database out of an `.apkg` file
//!
//! A package is a ZIP archive. The SQLite collection inside is copied to a
//! uniquely named temp file, opened read-only, and deleted again when the
//! returned guard is closed or dropped.

use std::fs::File;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tempfile::NamedTempFile;
use zip::ZipArchive;

use super::errors::{ArchiveError, DatabaseError, ImportError};
use crate::config::CompareConfig;

/// Where to look inside a package and where to unpack to
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Candidate entry names, first match wins
    pub entry_names: Vec<String>,
    /// Parent directory of the temp file; system temp dir when `None`
    pub extract_dir: Option<PathBuf>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from(&CompareConfig::default())
    }
}

impl From<&CompareConfig> for ExtractOptions {
    fn from(config: &CompareConfig) -> Self {
        Self {
            entry_names: config.collection_entries.clone(),
            extract_dir: config.extract_dir.clone(),
        }
    }
}

/// An open collection backed by a temp file.
pub struct ExtractedCollection {
    // Declared before `file` so the connection is closed before the file is
    // removed when the guard is dropped.
    conn: Connection,
    file: NamedTempFile,
    entry_name: String,
}

impl ExtractedCollection {
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Location of the extracted database
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Which package entry was extracted
    pub fn entry_name(&self) -> &str {
        &self.entry_name
    }

    /// Close the database and delete the extracted file.
    pub fn close(self) -> Result<(), ArchiveError> {
        let Self { conn, file, .. } = self;

        if let Err((conn, e)) = conn.close() {
            log::warn!("Failed to close extracted collection cleanly: {}", e);
            drop(conn);
        }

        let path = file.path().to_path_buf();
        file.close()?;
        log::debug!("Removed extracted collection {:?}", path);
        Ok(())
    }
}

/// Unpack and open the collection database of a package.
pub fn open_package(
    package_path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractedCollection, ImportError> {
    if !package_path.exists() {
        return Err(ArchiveError::NotFound(package_path.to_path_buf()).into());
    }

    let file = File::open(package_path).map_err(ArchiveError::from)?;
    let mut archive = ZipArchive::new(file).map_err(ArchiveError::from)?;

    let entry_name = options
        .entry_names
        .iter()
        .find(|name| archive.index_for_name(name).is_some())
        .cloned()
        .ok_or_else(|| ArchiveError::MissingCollection {
            path: package_path.to_path_buf(),
            expected: options.entry_names.join(", "),
        })?;

    let mut temp = create_temp_file(options.extract_dir.as_deref())?;
    {
        let mut entry = archive.by_name(&entry_name).map_err(ArchiveError::from)?;
        std::io::copy(&mut entry, temp.as_file_mut()).map_err(ArchiveError::from)?;
    }

    log::info!(
        "Extracted {} from {:?} to {:?}",
        entry_name,
        package_path,
        temp.path()
    );

    // On failure `temp` is dropped here, which removes the file.
    let conn = Connection::open_with_flags(temp.path(), OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(DatabaseError::from)?;

    Ok(ExtractedCollection {
        conn,
        file: temp,
        entry_name,
    })
}

fn create_temp_file(dir: Option<&Path>) -> Result<NamedTempFile, ArchiveError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("collection-").suffix(".anki21");

    let temp = match dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    Ok(temp)
}
