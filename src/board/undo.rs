//! Undo buffer - single-slot, time-bounded holding area for the most
//! recently deleted task
//!
//! The expiry deadline is plain data checked from the TUI poll loop rather
//! than a detached timer, so canceling it (on undo) is free and it cannot
//! fire twice for the same deletion.

use std::time::{Duration, Instant};

use tracing::debug;

use super::task::Task;

#[derive(Debug, Default)]
pub enum UndoBuffer {
    #[default]
    Empty,
    Holding {
        task: Task,
        deadline: Instant,
    },
}

impl UndoBuffer {
    pub fn new() -> Self {
        Self::Empty
    }

    pub fn is_holding(&self) -> bool {
        matches!(self, Self::Holding { .. })
    }

    /// Hold a freshly deleted task, discarding any prior snapshot and
    /// restarting the expiry window.
    pub fn hold(&mut self, task: Task, ttl: Duration) {
        if let Self::Holding { task: prior, .. } = self {
            debug!("undo buffer overwritten, '{}' unrecoverable", prior.title);
        }
        *self = Self::Holding {
            task,
            deadline: Instant::now() + ttl,
        };
    }

    /// Take the held task for restoration, canceling the pending expiry.
    /// Returns `None` while empty.
    pub fn take(&mut self) -> Option<Task> {
        match std::mem::take(self) {
            Self::Empty => None,
            Self::Holding { task, .. } => Some(task),
        }
    }

    /// Drop the held task if its window has elapsed. Returns true if the
    /// buffer just expired, so callers can refresh the toast.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self {
            Self::Holding { task, deadline } if *deadline <= now => {
                debug!("undo window elapsed, '{}' unrecoverable", task.title);
                *self = Self::Empty;
                true
            }
            _ => false,
        }
    }

    /// Title of the held task, for the toast.
    pub fn held_title(&self) -> Option<&str> {
        match self {
            Self::Holding { task, .. } => Some(&task.title),
            Self::Empty => None,
        }
    }
}
