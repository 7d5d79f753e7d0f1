use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::state::{Filter, SortBy};
use crate::model::task::Task;

/// Name of the snapshot record inside the data directory.
const SNAPSHOT_FILE: &str = "store.json";

/// Error type for snapshot writes
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize snapshot: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// The durable state of the task store (written as a single JSON record)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub filter: Filter,
    #[serde(default)]
    pub sort_by: SortBy,
}

/// Default data directory, respecting XDG_DATA_HOME
pub fn data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    base.join("tick")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Path of the snapshot record inside `data_dir`.
pub fn snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SNAPSHOT_FILE)
}

/// Read the snapshot from the data directory.
/// If the file doesn't exist, returns the empty default state.
/// If the file is corrupted, backs it up as .bak and returns the default.
pub fn read_snapshot(data_dir: &Path) -> Snapshot {
    let path = snapshot_path(data_dir);
    if !path.exists() {
        return Snapshot::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str::<Snapshot>(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // Corrupted — back up and start fresh
                let bak = path.with_extension("json.bak");
                let _ = fs::copy(&path, &bak);
                eprintln!(
                    "warning: could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                Snapshot::default()
            }
        },
        Err(_) => Snapshot::default(),
    }
}

/// Write the snapshot to the data directory.
/// A reader never observes a partial record: the content lands in a temp
/// file first and is renamed over the old one.
pub fn write_snapshot(data_dir: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let path = snapshot_path(data_dir);
    let content = serde_json::to_string_pretty(snapshot)?;
    fs::create_dir_all(data_dir).map_err(|e| SnapshotError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    atomic_write(&path, content.as_bytes())
        .map_err(|e| SnapshotError::WriteError { path, source: e })
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
