//! Task entity and summary reporting.
//!
//! A task is a plain record: sequential integer id, short text, done flag.
//! The JSON field names (`id`, `text`, `done`) are the file format and the
//! API wire format, so they must not change.

use serde::{Deserialize, Serialize};

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential integer identifier, unique within the store
    pub id: u64,
    /// Task text
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Human-readable one-line rendering: `3. [x] Buy milk`
    pub fn render_line(&self) -> String {
        let mark = if self.done { "x" } else { " " };
        format!("{}. [{}] {}", self.id, mark, self.text)
    }
}

/// Counts for the `status` command and `GET /todos/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

impl StatusReport {
    /// Tally a task slice
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let done = tasks.iter().filter(|task| task.done).count();
        Self {
            total,
            done,
            pending: total - done,
        }
    }
}
