//! Task board core - store, undo buffer, ordering, sample data
//!
//! Everything here is plain synchronous state; the TUI drives it from a
//! single loop task and the CLI reads it once per invocation.

pub mod calendar;
pub mod seed;
pub mod store;
pub mod task;
pub mod undo;

use std::time::{Duration, Instant};

pub use calendar::{build_agenda, AgendaDay, CalendarEvent};
pub use store::{Reject, TaskStore};
pub use task::{Task, TaskId};
pub use undo::UndoBuffer;

/// The task board: the store plus the delete/undo wiring. All mutations from
/// the presentation layer go through here.
#[derive(Debug)]
pub struct Board {
    store: TaskStore,
    undo: UndoBuffer,
    undo_ttl: Duration,
}

impl Board {
    pub fn new(store: TaskStore, undo_ttl: Duration) -> Self {
        Self {
            store,
            undo: UndoBuffer::new(),
            undo_ttl,
        }
    }

    /// Board seeded with the sample data and the default 3 second window.
    pub fn seeded() -> Self {
        Self::new(seed::sample_store(), Duration::from_secs(3))
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn undo_pending(&self) -> bool {
        self.undo.is_holding()
    }

    pub fn undo_toast_title(&self) -> Option<&str> {
        self.undo.held_title()
    }

    /// Delete a task, handing its snapshot to the undo buffer. Any prior
    /// held snapshot is discarded and the window restarts.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        match self.store.remove(id) {
            Some(task) => {
                self.undo.hold(task, self.undo_ttl);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently deleted task to the front of the store.
    /// No-op once the buffer is empty (already undone, or expired).
    pub fn undo(&mut self) -> bool {
        match self.undo.take() {
            Some(task) => {
                self.store.restore(task);
                true
            }
            None => false,
        }
    }

    /// Expire the undo window if due. Called from the TUI poll loop; returns
    /// true when the toast should be cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.undo.expire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(TaskStore::new(), Duration::from_secs(3))
    }

    #[test]
    fn test_delete_moves_snapshot_to_undo_buffer() {
        let mut board = board();
        let id = board.store_mut().add("doomed").unwrap();

        assert!(board.delete(&id));
        assert!(board.store().is_empty());
        assert_eq!(board.undo_toast_title(), Some("doomed"));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut board = board();
        board.store_mut().add("safe").unwrap();

        assert!(!board.delete(&TaskId::new()));
        assert_eq!(board.store().len(), 1);
        assert!(!board.undo_pending());
    }

    #[test]
    fn test_undo_restores_to_front() {
        let mut board = board();
        let t1 = board.store_mut().add("T1").unwrap();
        board.store_mut().add("New").unwrap();

        board.delete(&t1);
        assert!(board.undo());

        let titles: Vec<_> = board
            .store()
            .tasks()
            .iter()
            .map(|t| t.title.clone())
            .collect();
        // Restored to the front, not its original position.
        assert_eq!(titles, vec!["T1", "New"]);
        assert!(!board.undo_pending());
    }

    #[test]
    fn test_undo_on_empty_buffer_is_noop() {
        let mut board = board();
        board.store_mut().add("task").unwrap();
        assert!(!board.undo());
        assert_eq!(board.store().len(), 1);
    }

    #[test]
    fn test_second_delete_overwrites_first() {
        let mut board = board();
        let a = board.store_mut().add("a").unwrap();
        let b = board.store_mut().add("b").unwrap();

        board.delete(&a);
        board.delete(&b);
        board.undo();

        // Only the most recent deletion is recoverable.
        let titles: Vec<_> = board
            .store()
            .tasks()
            .iter()
            .map(|t| t.title.clone())
            .collect();
        assert_eq!(titles, vec!["b"]);
        assert!(!board.undo());
    }

    #[test]
    fn test_expired_undo_leaves_task_deleted() {
        let mut board = Board::new(TaskStore::new(), Duration::ZERO);
        let id = board.store_mut().add("gone").unwrap();

        board.delete(&id);
        assert!(board.tick(Instant::now()));
        assert!(!board.undo());
        assert!(board.store().is_empty());
    }

    #[test]
    fn test_tick_before_deadline_keeps_toast() {
        let mut board = board();
        let id = board.store_mut().add("held").unwrap();
        board.delete(&id);

        assert!(!board.tick(Instant::now()));
        assert!(board.undo_pending());
    }
}
