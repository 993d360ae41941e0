//! Clap definition for the `focus` binary

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "focus")]
#[command(about = "Terminal task and calendar board", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the board in display order
    List(super::list::ListArgs),

    /// Print the upcoming 7-day agenda
    Agenda,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
