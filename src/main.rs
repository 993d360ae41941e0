//! Focus - Task and calendar board for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use focus_board::cli::{self, Cli, Commands};
use focus_board::config::Config;
use focus_board::tui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("FOCUS_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("focus_board=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion needs no config and works in read-only environments
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "focus", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;

    match cli.command {
        Some(Commands::List(args)) => cli::list::run(&config, args),
        Some(Commands::Agenda) => cli::agenda::run(&config),
        None => tui::run(&config).await,
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
