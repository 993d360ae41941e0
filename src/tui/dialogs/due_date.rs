//! Due date entry dialog
//!
//! Submitting an empty field clears the due date; a malformed date shows an
//! error and keeps the dialog open.

use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

pub struct DueDateDialog {
    task_title: String,
    input: Input,
    error: Option<String>,
}

impl DueDateDialog {
    pub fn new(task_title: &str, current: Option<NaiveDate>) -> Self {
        let prefill = current
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        Self {
            task_title: task_title.to_string(),
            input: Input::new(prefill),
            error: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<Option<NaiveDate>> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let trimmed = self.input.value().trim();
                if trimmed.is_empty() {
                    return DialogResult::Submit(None);
                }
                match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                    Ok(date) => DialogResult::Submit(Some(date)),
                    Err(_) => {
                        self.error = Some("Use YYYY-MM-DD".to_string());
                        DialogResult::Continue
                    }
                }
            }
            // Only date characters reach the input; edit and cursor keys
            // pass straight through.
            KeyCode::Char(c) if !(c.is_ascii_digit() || c == '-') => DialogResult::Continue,
            _ => {
                self.input.handle_event(&Event::Key(key));
                self.error = None;
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 44, 9);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Due Date ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        let task_line = Line::from(vec![
            Span::styled("Task: ", Style::default().fg(theme.dimmed)),
            Span::styled(&self.task_title, Style::default().fg(theme.text)),
        ]);
        frame.render_widget(Paragraph::new(task_line), chunks[0]);

        render_text_field(frame, chunks[1], "Date:", &self.input, theme);

        let hint = match &self.error {
            Some(err) => Line::from(Span::styled(
                err.clone(),
                Style::default().fg(theme.overdue),
            )),
            None => Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(" set (empty clears)  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ]),
        };
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}
