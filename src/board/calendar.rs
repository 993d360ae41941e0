//! Mock calendar feed and the 7-day agenda projection

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::store::TaskStore;
use super::task::Task;

/// A mocked calendar entry. Times are display labels, not chronology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub time: String,
}

impl CalendarEvent {
    pub fn new(id: &str, title: &str, time: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            time: time.to_string(),
        }
    }
}

/// One day of the Upcoming view: incomplete tasks due that day plus any
/// static events scheduled on it.
#[derive(Debug, Clone)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
    pub events: Vec<CalendarEvent>,
}

impl AgendaDay {
    pub fn is_clear(&self) -> bool {
        self.tasks.is_empty() && self.events.is_empty()
    }

    /// Section header in the original's style, e.g. "MONDAY, FEB 23".
    pub fn heading(&self) -> String {
        self.date.format("%A, %b %-d").to_string().to_uppercase()
    }
}

/// Build the 7-day agenda starting the day after `today`. Tasks come from
/// the live incomplete projection bucketed by due date; events come from the
/// static schedule. Pure with respect to the store.
pub fn build_agenda(
    store: &TaskStore,
    today: NaiveDate,
    schedule: &[(NaiveDate, CalendarEvent)],
) -> Vec<AgendaDay> {
    let incomplete = store.incomplete();
    (1..=7)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let tasks = incomplete
                .iter()
                .filter(|t| t.is_due_on(date))
                .map(|t| (*t).clone())
                .collect();
            let events = schedule
                .iter()
                .filter(|(d, _)| *d == date)
                .map(|(_, e)| e.clone())
                .collect();
            AgendaDay { date, tasks, events }
        })
        .collect()
}
