//! Task operations layer.
//!
//! Single entry point shared by the CLI and the HTTP adapter: validates
//! caller input (non-blank text, parseable numeric id), runs the store
//! mutation, and persists the collection after every change. Errors carry
//! the invalid-input / not-found / internal classification that both
//! adapters map onto exit codes and HTTP statuses.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::{StatusReport, Task};

/// Operations over a task store
#[derive(Debug)]
pub struct TaskOps {
    store: TaskStore,
}

impl TaskOps {
    /// Open the store backing file and load it into memory
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: TaskStore::open(path)?,
        })
    }

    /// Add a task with the next sequential id
    pub fn add(&mut self, text: &str) -> Result<Task> {
        let text = valid_text(text)?;
        let task = Task::new(self.store.next_id(), text);
        self.store.add(task.clone());
        self.store.save()?;
        Ok(task)
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Look up a task by its raw id argument
    pub fn get(&self, id: &str) -> Result<&Task> {
        let id = parse_id(id)?;
        self.store.find(id)
    }

    /// Replace the text of a task
    pub fn update(&mut self, id: &str, text: &str) -> Result<Task> {
        let id = parse_id(id)?;
        let text = valid_text(text)?;
        let task = self.store.find_mut(id)?;
        task.text = text;
        let updated = task.clone();
        self.store.save()?;
        Ok(updated)
    }

    /// Flip the done flag of a task
    pub fn toggle(&mut self, id: &str) -> Result<Task> {
        let id = parse_id(id)?;
        let task = self.store.find_mut(id)?;
        task.toggle();
        let updated = task.clone();
        self.store.save()?;
        Ok(updated)
    }

    /// Delete a task, returning the removed record
    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let id = parse_id(id)?;
        let removed = self.store.remove(id)?;
        self.store.save()?;
        Ok(removed)
    }

    /// Summary counts over the whole collection
    pub fn status(&self) -> StatusReport {
        StatusReport::from_tasks(self.store.tasks())
    }
}

/// Parse a raw id argument; a non-numeric id is invalid input, not a miss
fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidTaskId(raw.to_string()))
}

/// Reject blank task text, trimming surrounding whitespace
fn valid_text(raw: &str) -> Result<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Error::EmptyText);
    }
    Ok(text.to_string())
}
