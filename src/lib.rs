//! Focus library - Core functionality for the task and calendar board

pub mod board;
pub mod cli;
pub mod config;
pub mod tui;
