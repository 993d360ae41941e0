//! Task store - ordered task collection and display projections

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use super::task::{Task, TaskId};

/// Why a mutation had no effect. Callers that want the original
/// silent-no-op behavior just discard the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reject {
    #[error("title is empty")]
    BlankTitle,
    #[error("no task with id {0}")]
    UnknownId(TaskId),
}

/// Ordered collection of tasks. New and restored tasks go to the front;
/// display order is derived per read by [`TaskStore::incomplete`] and
/// [`TaskStore::completed`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in raw store order (most recent insertion first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Add a task to the front of the store. Blank titles are rejected and
    /// the store is left untouched.
    pub fn add(&mut self, title: &str) -> Result<TaskId, Reject> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            debug!("rejected add: blank title");
            return Err(Reject::BlankTitle);
        }

        let task = Task::new(trimmed);
        let id = task.id.clone();
        self.tasks.insert(0, task);
        Ok(id)
    }

    /// Flip the completion flag.
    pub fn toggle(&mut self, id: &TaskId) -> Result<(), Reject> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(())
    }

    /// Replace the title with the trimmed text. A blank result leaves the
    /// prior title untouched.
    pub fn rename(&mut self, id: &TaskId, new_title: &str) -> Result<(), Reject> {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            debug!("rejected rename of {}: blank title", id);
            return Err(Reject::BlankTitle);
        }
        let task = self.get_mut(id)?;
        task.title = trimmed.to_string();
        Ok(())
    }

    /// Set or clear the due date.
    pub fn set_due(&mut self, id: &TaskId, due: Option<NaiveDate>) -> Result<(), Reject> {
        let task = self.get_mut(id)?;
        task.due = due;
        Ok(())
    }

    /// Detach a task and return its snapshot. Absent ids have no effect.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Reinsert a previously removed task at the front, keeping its original
    /// id. The id is assumed not to be present in the store.
    pub fn restore(&mut self, task: Task) {
        debug_assert!(self.get(&task.id).is_none());
        self.tasks.insert(0, task);
    }

    /// Completed tasks in store order.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    /// Incomplete tasks sorted for display: dated before undated, dated
    /// ascending by due date, undated in store order. The sort is stable so
    /// equal keys keep their relative store order.
    pub fn incomplete(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| !t.completed).collect();
        tasks.sort_by(|a, b| match (a.due, b.due) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        tasks
    }

    fn get_mut(&mut self, id: &TaskId) -> Result<&mut Task, Reject> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| {
                debug!("rejected mutation: unknown id {}", id);
                Reject::UnknownId(id.clone())
            })
    }
}
