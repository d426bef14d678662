//! Local persistence for the task list.
//!
//! The list is written to two slot files, a primary and a mirror. Each slot is a
//! JSON document:
//!
//! ```json
//! { "tasks": [ ... ], "lastSaved": "2025-01-15T09:30:00Z" }
//! ```
//!
//! Every slot is replaced through a temp file and a rename, so a reader never sees
//! a half-written slot. The pair as a whole is not atomic: if the process dies
//! between the two renames the mirror lags one snapshot behind.
//!
//! Loading prefers the primary slot and consults the mirror when the primary is
//! missing or unreadable.

use super::config::StorageConfig;
use super::data_storage::DataStorage;
use super::error::TaskResult;
use super::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub const PRIMARY_SLOT_FILE: &str = "tasks.json";
pub const MIRROR_SLOT_FILE: &str = "tasks.mirror.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Slot {
    tasks: Vec<Task>,
    last_saved: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LocalStore {
    primary: PathBuf,
    mirror: PathBuf,
}

impl LocalStore {
    pub fn new(primary: impl Into<PathBuf>, mirror: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            mirror: mirror.into(),
        }
    }

    /// Places both slots inside `storage` using the file names from `config`.
    ///
    /// Nothing is touched on disk until the first [`LocalStore::save`].
    pub fn from_config(storage: &DataStorage, config: &StorageConfig) -> Self {
        let base = storage.base_path();
        Self::new(base.join(&config.primary_file), base.join(&config.mirror_file))
    }

    pub fn primary_path(&self) -> &Path {
        &self.primary
    }

    pub fn mirror_path(&self) -> &Path {
        &self.mirror
    }

    /// Returns the saved list, or an empty list when neither slot can be read.
    pub fn load(&self) -> Vec<Task> {
        for path in [&self.primary, &self.mirror] {
            match Self::read_slot(path) {
                Ok(Some(slot)) => {
                    debug!(path = %path.display(), count = slot.tasks.len(), "loaded task slot");
                    let mut tasks = slot.tasks;
                    tasks.iter_mut().for_each(Task::reconcile);
                    return tasks;
                }
                Ok(None) => debug!(path = %path.display(), "task slot absent"),
                Err(err) => warn!(path = %path.display(), error = %err, "task slot unreadable"),
            }
        }
        Vec::new()
    }

    /// Writes `tasks` with a fresh timestamp to both slots.
    pub fn save(&self, tasks: &[Task]) -> TaskResult<()> {
        let slot = Slot {
            tasks: tasks.to_vec(),
            last_saved: Utc::now(),
        };
        let body = serde_json::to_vec_pretty(&slot)?;
        Self::write_slot(&self.primary, &body)?;
        Self::write_slot(&self.mirror, &body)?;
        debug!(count = tasks.len(), "saved task slots");
        Ok(())
    }

    /// Timestamp of the last successful save recorded in the primary slot.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        Self::read_slot(&self.primary).ok().flatten().map(|slot| slot.last_saved)
    }

    fn read_slot(path: &Path) -> TaskResult<Option<Slot>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_slot(path: &Path, body: &[u8]) -> TaskResult<()> {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(body)?;
        file.flush()?;
        file.persist(path)?;
        Ok(())
    }
}
