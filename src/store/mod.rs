//! File-backed password vault.
//!
//! Entries are persisted as line-delimited JSON records. A missing or
//! corrupt vault file loads as an empty initial state, and every save goes
//! through a temp-file-then-rename step so a crash mid-write never corrupts
//! the previously committed state.

use crate::{Error, Result};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// A stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Service or site the credential belongs to
    pub service: String,
    /// Login/username
    pub login: String,
    /// The stored password
    pub password: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl PasswordEntry {
    /// Create a new entry with a fresh id and the current timestamp.
    pub fn new(
        service: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            service: service.into(),
            login: login.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}

/// The password vault: an ordered collection of entries bound to one file.
pub struct PasswordStore {
    path: PathBuf,
    entries: RwLock<Vec<PasswordEntry>>,
}

impl PasswordStore {
    /// Open the vault at the given path, loading any existing entries.
    ///
    /// A missing file is treated as an empty vault. Unparseable lines are
    /// skipped with a warning rather than aborting the load.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = load_entries(&path);
        debug!(path = %path.display(), count = entries.len(), "vault loaded");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in stored order.
    pub fn list(&self) -> Vec<PasswordEntry> {
        self.entries.read().clone()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the vault is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Append an entry and persist.
    pub fn add(&self, entry: PasswordEntry) -> Result<()> {
        let mut entries = self.entries.write();
        entries.push(entry);
        self.save(&entries)
    }

    /// Remove the entry with the given id and persist.
    ///
    /// Returns false when no entry matches.
    pub fn remove(&self, id: &Uuid) -> Result<bool> {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|e| e.id != *id);
        if entries.len() == before {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }

    /// Replace the entry with a matching id and persist.
    ///
    /// Returns false when no entry matches; the vault is left unchanged.
    pub fn update(&self, updated: PasswordEntry) -> Result<bool> {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                *slot = updated;
            }
            None => return Ok(false),
        }
        self.save(&entries)?;
        Ok(true)
    }

    /// Persist all entries atomically: serialize to `<path>.tmp`, then
    /// rename over the vault file.
    fn save(&self, entries: &[PasswordEntry]) -> Result<()> {
        let mut contents = String::new();
        for entry in entries {
            contents.push_str(&serde_json::to_string(entry)?);
            contents.push('\n');
        }

        let tmp = temp_path(&self.path);
        fs::write(&tmp, contents)
            .map_err(|e| Error::storage_at(format!("failed to write vault: {}", e), &tmp))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::storage_at(format!("failed to replace vault: {}", e), &self.path)
        })?;

        debug!(path = %self.path.display(), count = entries.len(), "vault saved");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn load_entries(path: &Path) -> Vec<PasswordEntry> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read vault, starting empty");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<PasswordEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    line = number + 1,
                    error = %e,
                    "skipping unparseable vault record"
                );
            }
        }
    }
    entries
}
