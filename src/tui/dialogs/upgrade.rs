//! Upgrade prompt dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::tui::styles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeTrigger {
    TaskLimit,
    CalendarLimit,
}

impl UpgradeTrigger {
    fn message(self) -> &'static str {
        match self {
            Self::TaskLimit => "You've reached 30 tasks on the free plan.",
            Self::CalendarLimit => "Connect more calendars on the Pro plan.",
        }
    }
}

/// Free vs Pro comparison rows: (feature, free, pro).
const PLAN_ROWS: &[(&str, &str, &str)] = &[
    ("Calendars", "1", "Unlimited"),
    ("Active Tasks", "30", "Unlimited"),
    ("Upcoming View", "×", "✓"),
    ("Future Features", "×", "✓"),
];

pub struct UpgradeDialog {
    trigger: UpgradeTrigger,
}

impl UpgradeDialog {
    pub fn new(trigger: UpgradeTrigger) -> Self {
        Self { trigger }
    }

    pub fn trigger(&self) -> UpgradeTrigger {
        self.trigger
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => DialogResult::Cancel,
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 54, 14);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Upgrade to Pro ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut lines = vec![
            Line::from(Span::styled(
                "You're running Focus like a pro.",
                Style::default().fg(theme.title).bold(),
            )),
            Line::from(Span::styled(
                self.trigger.message(),
                Style::default().fg(theme.hint),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{:<18}", "FEATURE"), Style::default().fg(theme.dimmed)),
                Span::styled(format!("{:<12}", "FREE"), Style::default().fg(theme.dimmed)),
                Span::styled("PRO", Style::default().fg(theme.accent).bold()),
            ]),
        ];

        for (feature, free, pro) in PLAN_ROWS {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<18}", feature), Style::default().fg(theme.text)),
                Span::styled(format!("{:<12}", free), Style::default().fg(theme.dimmed)),
                Span::styled(*pro, Style::default().fg(theme.accent)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc maybe later",
            Style::default().fg(theme.dimmed),
        )));

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner.inner(Margin::new(1, 0)),
        );
    }
}
