//! Task data structure and related functionality.
//!
//! A `Task` is the persisted unit of the list: one or more lines of free text,
//! a priority and a due date/time. Field names follow the on-disk JSON layout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::due::{classify, parse_date, parse_time};
use crate::error::ParseError;
use crate::fields::*;

/// A single entry in the task list.
///
/// `task_date` and `task_time` hold the canonical `yyyy-MM-dd` / `HH:mm`
/// strings and are displayed exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "task")]
    pub content: Vec<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub task_date: String,
    pub task_time: String,
}

impl Task {
    pub fn new(content: Vec<String>, priority: TaskPriority, task_date: String, task_time: String) -> Self {
        Task { content, priority, task_date, task_time }
    }

    /// Parse the stored due date.
    pub fn due_date(&self) -> Result<NaiveDate, ParseError> {
        parse_date(&self.task_date)
    }

    /// Urgency of this task relative to `today`.
    pub fn due_tag(&self, today: NaiveDate) -> Result<DueTag, ParseError> {
        Ok(classify(self.due_date()?, today))
    }

    /// Check the invariants a loaded task must hold, describing the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.content.iter().all(|l| l.trim().is_empty()) {
            return Err("task has no content".into());
        }
        self.due_date().map_err(|e| e.to_string())?;
        parse_time(&self.task_time).map_err(|e| e.to_string())?;
        Ok(())
    }
}
