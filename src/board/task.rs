//! Task data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable task identifier, allocated once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    /// Non-empty trimmed text. The store rejects edits that would blank it.
    pub title: String,

    pub completed: bool,

    /// Optional due date, no time component.
    #[serde(default)]
    pub due: Option<NaiveDate>,
}

impl Task {
    /// Create an incomplete, undated task. The title must already be trimmed
    /// and non-empty; the store enforces that before calling.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            completed: false,
            due: None,
        }
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Overdue relative to the pinned board date. Completed tasks are never
    /// styled as overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due {
            Some(due) => due < today && !self.completed,
            None => false,
        }
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due == Some(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_task_is_incomplete_and_undated() {
        let task = Task::new("Review mockups");
        assert!(!task.completed);
        assert!(task.due.is_none());
    }

    #[test]
    fn test_overdue_requires_past_due_date() {
        let today = date(2026, 2, 22);
        let task = Task::new("t").with_due(date(2026, 2, 18));
        assert!(task.is_overdue(today));

        let future = Task::new("t").with_due(date(2026, 2, 24));
        assert!(!future.is_overdue(today));

        let undated = Task::new("t");
        assert!(!undated.is_overdue(today));
    }

    #[test]
    fn test_completed_task_is_never_overdue() {
        let today = date(2026, 2, 22);
        let task = Task::new("t").with_due(date(2026, 2, 18)).done();
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_is_due_on() {
        let task = Task::new("t").with_due(date(2026, 2, 24));
        assert!(task.is_due_on(date(2026, 2, 24)));
        assert!(!task.is_due_on(date(2026, 2, 25)));
        assert!(!Task::new("t").is_due_on(date(2026, 2, 24)));
    }
}
