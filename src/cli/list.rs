//! `focus list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::board::{Task, TaskStore};
use crate::config::Config;

const TABLE_COL_STATE: usize = 5;
const TABLE_COL_TITLE: usize = 40;
const TABLE_COL_DUE: usize = 12;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show completed tasks
    #[arg(long)]
    pub completed: bool,
}

#[derive(Serialize)]
struct TaskJson {
    id: String,
    title: String,
    completed: bool,
    due: Option<chrono::NaiveDate>,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            completed: task.completed,
            due: task.due,
        }
    }
}

/// Board contents in display order: the incomplete projection first, then
/// the completed tasks.
fn display_order(store: &TaskStore) -> Vec<&Task> {
    let mut tasks = store.incomplete();
    tasks.extend(store.completed());
    tasks
}

fn print_table_header() {
    println!(
        "{:<width_state$} {:<width_title$} {:<width_due$} ID",
        "",
        "TITLE",
        "DUE",
        width_state = TABLE_COL_STATE,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_STATE + TABLE_COL_TITLE + TABLE_COL_DUE + 11)
    );
}

fn print_table_row(task: &Task, today: chrono::NaiveDate) {
    let state = if task.completed { "[x]" } else { "[ ]" };
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let due = match task.due {
        Some(due) if task.is_overdue(today) => format!("{} !", due.format("%Y-%m-%d")),
        Some(due) => due.format("%Y-%m-%d").to_string(),
        None => String::new(),
    };
    let id = super::truncate_id(task.id.as_str(), 8);
    println!(
        "{:<width_state$} {:<width_title$} {:<width_due$} {}",
        state,
        title,
        due,
        id,
        width_state = TABLE_COL_STATE,
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE
    );
}

pub fn run(config: &Config, args: ListArgs) -> Result<()> {
    let store = crate::board::seed::sample_store();

    let tasks: Vec<&Task> = if args.completed {
        store.completed()
    } else {
        display_order(&store)
    };

    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    if args.json {
        let out: Vec<TaskJson> = tasks.iter().map(|t| TaskJson::from(*t)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_table_header();
    for task in tasks {
        print_table_row(task, config.today);
    }
    Ok(())
}
