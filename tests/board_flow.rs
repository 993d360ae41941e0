//! Integration tests for the board: add, toggle, delete/undo, and the
//! projections the views read. These drive the public API the way the TUI
//! event loop does.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use focus_board::board::{build_agenda, Board, Task, TaskStore};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}

#[test]
fn test_delete_then_undo_restores_to_front() {
    let mut store = TaskStore::new();
    let t2 = store.add("T2").unwrap();
    let t1 = store.add("T1").unwrap();
    let _ = t2;
    let mut board = Board::new(store, Duration::from_secs(3));

    let new_id = board.store_mut().add("New").unwrap();
    let _ = new_id;
    assert_eq!(titles(&board.store().incomplete()), ["New", "T1", "T2"]);

    assert!(board.delete(&t1));
    assert_eq!(titles(&board.store().incomplete()), ["New", "T2"]);
    assert_eq!(board.undo_toast_title(), Some("T1"));

    assert!(board.undo());
    // The restored task comes back at the front, not at its old slot
    assert_eq!(titles(&board.store().incomplete()), ["T1", "New", "T2"]);
    assert!(!board.undo_pending());
}

#[test]
fn test_undo_after_window_elapsed_is_a_no_op() {
    let mut board = Board::new(TaskStore::new(), Duration::ZERO);
    let id = board.store_mut().add("Ephemeral").unwrap();

    assert!(board.delete(&id));
    assert!(board.tick(Instant::now()), "zero-length window expires on the next tick");

    assert!(!board.undo());
    assert!(board.store().is_empty());
}

#[test]
fn test_second_delete_discards_the_first_snapshot() {
    let mut board = Board::new(TaskStore::new(), Duration::from_secs(3));
    let a = board.store_mut().add("A").unwrap();
    let b = board.store_mut().add("B").unwrap();

    board.delete(&a);
    board.delete(&b);
    assert_eq!(board.undo_toast_title(), Some("B"));

    assert!(board.undo());
    assert_eq!(titles(&board.store().incomplete()), ["B"]);
    // A is gone for good
    assert!(!board.undo());
}

#[test]
fn test_toggle_is_self_inverse() {
    let mut store = TaskStore::new();
    let id = store.add("Flip me").unwrap();

    store.toggle(&id).unwrap();
    assert!(store.get(&id).unwrap().completed);
    store.toggle(&id).unwrap();
    assert!(!store.get(&id).unwrap().completed);
}

#[test]
fn test_incomplete_projection_sorts_dated_before_undated() {
    let mut store = TaskStore::new();
    let a = store.add("A").unwrap();
    let b = store.add("B").unwrap();
    let c = store.add("C").unwrap();
    store.set_due(&a, Some(date("2026-02-20"))).unwrap();
    store.set_due(&c, Some(date("2026-02-18"))).unwrap();
    let _ = b;

    assert_eq!(titles(&store.incomplete()), ["C", "A", "B"]);
}

#[test]
fn test_blank_titles_are_rejected_without_mutating() {
    let mut store = TaskStore::new();
    assert!(store.add("   ").is_err());
    assert!(store.is_empty());

    let id = store.add("Keep me").unwrap();
    assert!(store.rename(&id, "").is_err());
    assert_eq!(store.get(&id).unwrap().title, "Keep me");
}

#[test]
fn test_agenda_buckets_follow_live_edits() {
    let mut store = TaskStore::new();
    let id = store.add("Ship it").unwrap();
    store.set_due(&id, Some(date("2026-02-24"))).unwrap();

    let today = date("2026-02-22");
    let agenda = build_agenda(&store, today, &[]);
    assert_eq!(agenda.len(), 7);
    assert_eq!(agenda[1].date, date("2026-02-24"));
    assert_eq!(agenda[1].tasks.len(), 1);

    // Completing the task empties its bucket on the next build
    store.toggle(&id).unwrap();
    let agenda = build_agenda(&store, today, &[]);
    assert!(agenda[1].tasks.is_empty());
}
