//! Shared text input rendering component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Renders a focused text input field with a label and an inverse-video
/// cursor over the current character position. Used by the add field, the
/// due-date dialog, and the onboarding task step.
pub fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &Input, theme: &Theme) {
    let value_style = Style::default().fg(theme.accent);
    let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

    let (before, at_cursor, after) = split_at_cursor(input.value(), input.visual_cursor());

    let mut spans = vec![
        Span::styled(
            label.to_string(),
            Style::default().fg(theme.accent).underlined(),
        ),
        Span::raw(" "),
    ];
    if !before.is_empty() {
        spans.push(Span::styled(before, value_style));
    }
    spans.push(Span::styled(at_cursor, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split a value into the text before the cursor, the character under it
/// (a space when the cursor sits past the end), and the text after.
fn split_at_cursor(value: &str, cursor: usize) -> (String, String, String) {
    let before: String = value.chars().take(cursor).collect();
    let at_cursor = value
        .chars()
        .nth(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = value.chars().skip(cursor + 1).collect();
    (before, at_cursor, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_cursor_at_end() {
        let (before, at, after) = split_at_cursor("hello", 5);
        assert_eq!(before, "hello");
        assert_eq!(at, " ");
        assert_eq!(after, "");
    }

    #[test]
    fn test_split_with_cursor_in_middle() {
        let (before, at, after) = split_at_cursor("hello", 2);
        assert_eq!(before, "he");
        assert_eq!(at, "l");
        assert_eq!(after, "lo");
    }

    #[test]
    fn test_split_empty_value() {
        let (before, at, after) = split_at_cursor("", 0);
        assert_eq!(before, "");
        assert_eq!(at, " ");
        assert_eq!(after, "");
    }

    #[test]
    fn test_split_counts_chars_not_bytes() {
        let (before, at, after) = split_at_cursor("naïve", 2);
        assert_eq!(before, "na");
        assert_eq!(at, "ï");
        assert_eq!(after, "ve");
    }
}
