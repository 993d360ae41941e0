//! `focus agenda` command implementation

use anyhow::Result;

use crate::board::{build_agenda, seed};
use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    let store = seed::sample_store();
    let schedule = seed::week_schedule();
    let agenda = build_agenda(&store, config.today, &schedule);

    println!("Upcoming — next 7 days\n");

    for day in agenda {
        println!("{}", day.heading());
        if day.is_clear() {
            println!("  A clear day. Keep it that way.");
        } else {
            for task in &day.tasks {
                println!("  [ ] {}", task.title);
            }
            for event in &day.events {
                println!("   ·  {} · {}", event.title, event.time);
            }
        }
        println!();
    }

    Ok(())
}
