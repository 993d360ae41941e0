//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

use super::board::BoardView;
use super::styles::Theme;
use crate::board::{seed, Board};
use crate::config::Config;

pub struct App {
    view: BoardView,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let board = Board::new(seed::sample_store(), config.undo_ttl());
        let view = BoardView::new(
            board,
            config.today,
            seed::today_events(),
            seed::week_schedule(),
        );
        let theme = Theme::by_name(&config.theme.name);

        Self {
            view,
            should_quit: false,
            theme,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            // Poll with short timeout for responsive input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);

                    // Draw immediately after input for responsiveness
                    terminal.draw(|f| self.render(f))?;

                    if self.should_quit {
                        break;
                    }
                    continue;
                }
            }

            // The undo toast clears itself when the window elapses
            if self.view.tick(Instant::now()) {
                terminal.draw(|f| self.render(f))?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.view.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global keybindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.view.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
}
