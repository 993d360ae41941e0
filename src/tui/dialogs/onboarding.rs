//! Onboarding overlay
//!
//! Three-step sequencer: welcome, connect calendar, first task. The final
//! step submits the typed task title, which the board view adds to the store.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    ConnectCalendar,
    FirstTask,
}

impl OnboardingStep {
    fn index(self) -> usize {
        match self {
            Self::Welcome => 0,
            Self::ConnectCalendar => 1,
            Self::FirstTask => 2,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::ConnectCalendar),
            Self::ConnectCalendar => Some(Self::FirstTask),
            Self::FirstTask => None,
        }
    }

    fn back(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::ConnectCalendar => Some(Self::Welcome),
            Self::FirstTask => Some(Self::ConnectCalendar),
        }
    }
}

pub struct OnboardingOverlay {
    step: OnboardingStep,
    task_input: Input,
}

impl OnboardingOverlay {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            task_input: Input::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => return DialogResult::Cancel,
            KeyCode::Left => {
                if let Some(prev) = self.step.back() {
                    self.step = prev;
                }
                return DialogResult::Continue;
            }
            _ => {}
        }

        match self.step {
            OnboardingStep::Welcome | OnboardingStep::ConnectCalendar => {
                if key.code == KeyCode::Enter {
                    if let Some(next) = self.step.next() {
                        self.step = next;
                    }
                }
                DialogResult::Continue
            }
            OnboardingStep::FirstTask => match key.code {
                KeyCode::Enter => {
                    // Done stays disabled until the title is non-blank.
                    if self.task_input.value().trim().is_empty() {
                        DialogResult::Continue
                    } else {
                        DialogResult::Submit(self.task_input.value().to_string())
                    }
                }
                _ => {
                    self.task_input.handle_event(&Event::Key(key));
                    DialogResult::Continue
                }
            },
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 52, 14);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // progress dots
                Constraint::Length(2), // heading
                Constraint::Length(3), // body
                Constraint::Min(1),    // hint
            ])
            .split(inner);

        // Progress dots
        let dots: Vec<Span> = (0..3)
            .flat_map(|i| {
                let style = if i == self.step.index() {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.dimmed)
                };
                vec![Span::styled("●", style), Span::raw(" ")]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
            chunks[0],
        );

        let heading = match self.step {
            OnboardingStep::Welcome => "Welcome to Focus",
            OnboardingStep::ConnectCalendar => "Connect your calendar",
            OnboardingStep::FirstTask => "Add your first task",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                heading,
                Style::default().fg(theme.title).bold(),
            )))
            .alignment(Alignment::Center),
            chunks[1],
        );

        match self.step {
            OnboardingStep::Welcome => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        "See your tasks and calendar in one place.",
                        Style::default().fg(theme.hint),
                    )))
                    .alignment(Alignment::Center),
                    chunks[2],
                );
            }
            OnboardingStep::ConnectCalendar => {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        "See your meetings alongside your tasks.",
                        Style::default().fg(theme.hint),
                    )))
                    .alignment(Alignment::Center),
                    chunks[2],
                );
            }
            OnboardingStep::FirstTask => {
                render_text_field(frame, chunks[2], ">", &self.task_input, theme);
            }
        }

        let hint = match self.step {
            OnboardingStep::FirstTask if self.task_input.value().trim().is_empty() => {
                "Type a task title to finish · ← back · Esc close"
            }
            OnboardingStep::FirstTask => "Enter done · ← back · Esc close",
            OnboardingStep::Welcome => "Enter get started · Esc close",
            OnboardingStep::ConnectCalendar => "Enter continue · ← back · Esc close",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.dimmed),
            )))
            .alignment(Alignment::Center),
            chunks[3],
        );
    }
}

impl Default for OnboardingOverlay {
    fn default() -> Self {
        Self::new()
    }
}
