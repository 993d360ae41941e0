//! Undo toast component
//!
//! Bottom-centered strip shown while the undo buffer holds a deleted task.
//! It disappears when the task is restored or the undo window elapses.

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::styles::Theme;

pub struct UndoToast;

impl UndoToast {
    pub fn render(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
        let text = format!(" Deleted \"{}\" — press u to undo ", title);
        let width = (text.chars().count() as u16).min(area.width);

        let toast_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height.saturating_sub(3),
            width,
            height: 1,
        };

        frame.render_widget(Clear, toast_area);

        let line = Line::from(vec![
            Span::styled(
                format!(" Deleted \"{}\" — press ", title),
                Style::default().fg(theme.toast_text),
            ),
            Span::styled("u", Style::default().fg(theme.toast_text).bold()),
            Span::styled(" to undo ", Style::default().fg(theme.toast_text)),
        ]);
        let toast = Paragraph::new(line).style(Style::default().bg(theme.toast_bg));
        frame.render_widget(toast, toast_area);
    }
}
