//! Hardcoded sample data the board is seeded with at startup

use chrono::NaiveDate;

use super::calendar::CalendarEvent;
use super::store::TaskStore;
use super::task::Task;

/// The date the sample data is written against. Urgency styling and the
/// Upcoming week stay deterministic when "today" is pinned here.
pub const DEFAULT_TODAY: &str = "2026-02-22";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Seed task list, in store order (front first).
pub fn sample_store() -> TaskStore {
    TaskStore::with_tasks(vec![
        Task::new("Review homepage redesign mockups"),
        Task::new("Send project brief to client"),
        Task::new("Prepare Q2 design roadmap").with_due(date(2026, 2, 24)),
        Task::new("Update Figma component library").with_due(date(2026, 2, 18)),
        Task::new("Schedule team standup").done(),
    ])
}

/// Today's mocked calendar feed.
pub fn today_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new("e1", "Design Weekly Sync", "9:00 AM – 9:45 AM"),
        CalendarEvent::new("e2", "Product Roadmap Review", "11:00 AM – 12:00 PM"),
        CalendarEvent::new("e3", "1:1 with Engineering Lead", "2:00 PM – 2:30 PM"),
        CalendarEvent::new("e4", "Stakeholder Presentation", "4:00 PM – 5:00 PM"),
    ]
}

/// Static events for the Upcoming week, keyed by date.
pub fn week_schedule() -> Vec<(NaiveDate, CalendarEvent)> {
    vec![
        (
            date(2026, 2, 23),
            CalendarEvent::new("ue1", "Design Review", "10:00 AM"),
        ),
        (
            date(2026, 2, 24),
            CalendarEvent::new("ue2", "All Hands Meeting", "3:00 PM"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_shape() {
        let store = sample_store();
        assert_eq!(store.len(), 5);
        assert_eq!(store.incomplete().len(), 4);
        assert_eq!(store.completed().len(), 1);
    }

    #[test]
    fn test_sample_store_display_order() {
        let store = sample_store();
        let incomplete: Vec<_> = store.incomplete().iter().map(|t| t.title.clone()).collect();
        // Dated tasks first (ascending), then undated in store order.
        assert_eq!(
            incomplete,
            vec![
                "Update Figma component library",
                "Prepare Q2 design roadmap",
                "Review homepage redesign mockups",
                "Send project brief to client",
            ]
        );
    }

    #[test]
    fn test_week_schedule_falls_inside_agenda_window() {
        let today = NaiveDate::parse_from_str(DEFAULT_TODAY, "%Y-%m-%d").unwrap();
        for (d, _) in week_schedule() {
            let offset = (d - today).num_days();
            assert!((1..=7).contains(&offset), "{} outside upcoming week", d);
        }
    }
}
