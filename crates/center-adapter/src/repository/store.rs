//! Database - the shared table store behind both repositories
//!
//! All tables live in one `RwLock`, so a write sees a consistent snapshot and
//! unique-index checks cannot interleave with another write. When a snapshot
//! path is configured, every committed write is flushed to disk before it
//! becomes visible; a failed flush leaves the tables untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use center_domain::RepositoryError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::records::{ProfileRecord, StudentRecord};

/// Every table plus the id sequences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tables {
    pub profiles: BTreeMap<i64, ProfileRecord>,
    pub students: BTreeMap<i64, StudentRecord>,
    #[serde(default)]
    pub profile_sequence: i64,
    #[serde(default)]
    pub student_sequence: i64,
}

impl Tables {
    pub fn next_profile_id(&mut self) -> i64 {
        self.profile_sequence += 1;
        self.profile_sequence
    }

    pub fn next_student_id(&mut self) -> i64 {
        self.student_sequence += 1;
        self.student_sequence
    }

    /// Sequences restart after the highest stored id if the file lacks them
    fn repair_sequences(&mut self) {
        let max_profile = self.profiles.keys().next_back().copied().unwrap_or(0);
        let max_student = self.students.keys().next_back().copied().unwrap_or(0);
        self.profile_sequence = self.profile_sequence.max(max_profile);
        self.student_sequence = self.student_sequence.max(max_student);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
    snapshot: Option<PathBuf>,
}

impl Database {
    /// A store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the snapshot at `path`, starting empty when it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let tables = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                RepositoryError::storage(format!("cannot read {}: {}", path.display(), e))
            })?;
            let mut tables: Tables = serde_json::from_str(&content).map_err(|e| {
                RepositoryError::storage(format!("cannot parse {}: {}", path.display(), e))
            })?;
            tables.repair_sequences();
            info!(
                path = %path.display(),
                profiles = tables.profiles.len(),
                students = tables.students.len(),
                "loaded data snapshot"
            );
            tables
        } else {
            info!(path = %path.display(), "no data snapshot yet, starting empty");
            Tables::default()
        };

        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
            snapshot: Some(path),
        })
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }

    pub fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T, RepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::storage("Failed to acquire read lock"))?;
        Ok(f(&tables))
    }

    /// Run `f` against a copy of the tables and commit the copy only if `f`
    /// and the snapshot flush both succeed.
    pub fn write<T>(
        &self,
        f: impl FnOnce(&mut Tables) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::storage("Failed to acquire write lock"))?;

        let mut draft = tables.clone();
        let out = f(&mut draft)?;

        if let Some(path) = &self.snapshot {
            flush(path, &draft)?;
        }

        *tables = draft;
        Ok(out)
    }
}

/// Write to a sibling temp file, then rename over the snapshot
fn flush(path: &Path, tables: &Tables) -> Result<(), RepositoryError> {
    let json = serde_json::to_string_pretty(tables)
        .map_err(|e| RepositoryError::storage(format!("cannot encode snapshot: {}", e)))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, json)
        .and_then(|_| std::fs::rename(&tmp, path))
        .map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to write data snapshot");
            RepositoryError::storage(format!("cannot write {}: {}", path.display(), e))
        })?;

    debug!(path = %path.display(), "data snapshot written");
    Ok(())
}
