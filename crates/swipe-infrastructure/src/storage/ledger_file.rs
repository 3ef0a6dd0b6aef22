//! Append-only outcome ledger stored as a TOML file.
//!
//! Appends are serialized across processes with an exclusive lock on a
//! sibling `.lock` file, and written via tmp file + fsync + atomic rename, so
//! readers never need the lock: they see either the old or the new file.

use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use swipe_core::outcome::OutcomeRecord;
use thiserror::Error;

/// Errors that can occur while reading or appending to the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Ledger parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Ledger serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Lock error: {0}")]
    Lock(String),
}

impl LedgerError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// On-disk layout: one `[[outcome]]` table per record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerDocument {
    #[serde(default, rename = "outcome")]
    outcomes: Vec<OutcomeRecord>,
}

/// A handle to a ledger file.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing or blank file is an empty ledger.
    pub fn load(&self) -> Result<Vec<OutcomeRecord>, LedgerError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| LedgerError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: LedgerDocument = toml::from_str(&content)?;
        Ok(document.outcomes)
    }

    /// Appends one record under the ledger lock.
    pub fn append(&self, record: OutcomeRecord) -> Result<(), LedgerError> {
        let _lock = LedgerLock::acquire(&self.path)?;

        let mut outcomes = self.load()?;
        outcomes.push(record);
        self.write_atomically(&LedgerDocument { outcomes })
    }

    fn write_atomically(&self, document: &LedgerDocument) -> Result<(), LedgerError> {
        let rendered = toml::to_string_pretty(document)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path).map_err(|e| LedgerError::io(&tmp_path, e))?;
        tmp_file
            .write_all(rendered.as_bytes())
            .and_then(|_| tmp_file.sync_all())
            .map_err(|e| LedgerError::io(&tmp_path, e))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| LedgerError::io(&self.path, e))
    }

    fn temp_path(&self) -> Result<PathBuf, LedgerError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            LedgerError::io(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no file name"),
            )
        })?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

/// Exclusive lock held for the duration of one append; released on drop.
///
/// The lock file itself is left in place: deleting it would let a second
/// writer lock a fresh inode while the first still holds the old one.
struct LedgerLock {
    file: File,
}

impl LedgerLock {
    fn acquire(ledger_path: &Path) -> Result<Self, LedgerError> {
        let lock_path = ledger_path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LedgerError::io(&lock_path, e))?;

        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| LedgerError::Lock(format!("Failed to lock {}: {}", lock_path.display(), e)))?;

        Ok(Self { file })
    }
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
