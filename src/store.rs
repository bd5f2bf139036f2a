//! Task store: a JSON file loaded into memory.
//!
//! The whole collection lives in a `Vec<Task>` and is rewritten to disk on
//! every save. Lookups are linear scans by id. There is no locking and no
//! multi-process coordination; the store is built for one caller at a time.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::task::Task;

/// In-memory task collection backed by a single JSON file
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Open the store at `path`, loading the JSON array if the file exists.
    ///
    /// A missing file is an empty store; any other read or parse failure is
    /// surfaced to the caller.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(Error::Io(err)),
        };
        Ok(Self { tasks, path })
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Next id to assign: one past the highest live id.
    ///
    /// Unlike counting tasks, this cannot hand out an id that collides with
    /// a surviving task after a deletion from the middle of the list.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    /// Append a task (id assignment is the caller's job, via `next_id`)
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Linear lookup by id
    pub fn find(&self, id: u64) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    /// Linear lookup by id (mutable)
    pub fn find_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    /// Remove a task by id, returning the removed record
    pub fn remove(&mut self, id: u64) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Rewrite the whole collection to disk as pretty-printed JSON.
    ///
    /// Writes go to a temp file in the same directory followed by a rename,
    /// so a reader never observes a partially written store.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// Write data atomically using temp file + rename
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}
