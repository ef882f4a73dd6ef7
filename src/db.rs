//! Task storage and JSON persistence.
//!
//! `TaskStore` owns the ordered task list for one session. Insertion order is
//! display order; callers select tasks by 0-based position.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::error::StoreError;
use crate::task::Task;

/// In-memory ordered collection of tasks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tasks from a JSON array, starting empty if the file does not exist.
    ///
    /// `null` entries are skipped. Every remaining task must have content and a
    /// parseable date and time.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "no task file, starting empty");
            return Ok(Self::default());
        }
        let buf = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<Option<Task>> =
            serde_json::from_str(&buf).map_err(|source| StoreError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        let tasks: Vec<Task> = entries.into_iter().flatten().collect();
        for (i, task) in tasks.iter().enumerate() {
            task.validate().map_err(|reason| StoreError::InvalidTask {
                path: path.to_path_buf(),
                position: i + 1,
                reason,
            })?;
        }
        debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskStore { tasks })
    }

    /// Save tasks to a JSON file using atomic write (temp file + rename).
    ///
    /// An empty store does not create a new file, but does overwrite an existing
    /// one so that deletions persist.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if self.tasks.is_empty() && !path.exists() {
            debug!(path = %path.display(), "nothing to save");
            return Ok(());
        }
        let data = serde_json::to_string_pretty(&self.tasks)?;
        let write_err = |source: std::io::Error| StoreError::Write { path: path.to_path_buf(), source };
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp).map_err(write_err)?;
        f.write_all(data.as_bytes()).map_err(write_err)?;
        f.flush().map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;
        info!(path = %path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        debug!(count = self.tasks.len(), "task added");
    }

    /// Remove and return the task at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(index);
        debug!(index, count = self.tasks.len(), "task removed");
        Some(task)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// Snapshot of all tasks in display order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
