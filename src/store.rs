//! Durable load/save of the tournament document as a single JSON file.

use crate::models::TournamentDocument;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why the persisted document could not be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed tournament document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Backing medium for the one tournament document. Every save overwrites the whole document.
pub trait DocumentStore: Send + Sync {
    /// Whether a persisted document is present.
    fn exists(&self) -> bool;

    /// Read the current document. Unreadable or malformed content is an error, never a default.
    fn load(&self) -> Result<TournamentDocument, StoreError>;

    /// Persist the full document, replacing previous content.
    fn save(&self, doc: &TournamentDocument) -> Result<(), StoreError>;

    /// Write the default document if none exists. Never overwrites. Returns true if it created one.
    fn initialize_if_absent(&self) -> Result<bool, StoreError> {
        if self.exists() {
            return Ok(false);
        }
        self.save(&TournamentDocument::initial())?;
        log::info!("Created default tournament document");
        Ok(true)
    }
}

/// Pretty-printed JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<TournamentDocument, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Written to a sibling temp file and renamed over the target, so a failed write leaves the old document.
    fn save(&self, doc: &TournamentDocument) -> Result<(), StoreError> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, doc)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        log::debug!("Saved tournament document to {}", self.path.display());
        Ok(())
    }
}
