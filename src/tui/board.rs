//! Board view - Today/Upcoming tabs, task list, and overlays

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::components::{render_text_field, HelpOverlay, UndoToast};
use super::dialogs::{
    DialogResult, DueDateDialog, OnboardingOverlay, UpgradeDialog, UpgradeTrigger,
};
use super::styles::Theme;
use crate::board::{build_agenda, Board, CalendarEvent, TaskId};

/// Which projection is on screen. Switching never touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Today,
    Upcoming,
}

impl ViewTab {
    pub fn toggle(self) -> Self {
        match self {
            Self::Today => Self::Upcoming,
            Self::Upcoming => Self::Today,
        }
    }
}

pub struct BoardView {
    board: Board,
    today: NaiveDate,
    today_events: Vec<CalendarEvent>,
    week_schedule: Vec<(NaiveDate, CalendarEvent)>,

    // UI state
    tab: ViewTab,
    cursor: usize,

    // Input modes
    add_input: Option<Input>,
    rename_input: Option<(TaskId, Input)>,
    date_dialog: Option<(TaskId, DueDateDialog)>,

    // Overlays
    show_help: bool,
    onboarding: Option<OnboardingOverlay>,
    upgrade: Option<UpgradeDialog>,
}

impl BoardView {
    pub fn new(
        board: Board,
        today: NaiveDate,
        today_events: Vec<CalendarEvent>,
        week_schedule: Vec<(NaiveDate, CalendarEvent)>,
    ) -> Self {
        Self {
            board,
            today,
            today_events,
            week_schedule,
            tab: ViewTab::default(),
            cursor: 0,
            add_input: None,
            rename_input: None,
            date_dialog: None,
            show_help: false,
            onboarding: None,
            upgrade: None,
        }
    }

    /// Expire the undo window. Returns true when the toast just cleared and
    /// a redraw is needed.
    pub fn tick(&mut self, now: std::time::Instant) -> bool {
        self.board.tick(now)
    }

    /// Task ids in display order: incomplete projection, then completed.
    fn visible_ids(&self) -> Vec<TaskId> {
        let store = self.board.store();
        let mut ids: Vec<TaskId> = store.incomplete().iter().map(|t| t.id.clone()).collect();
        ids.extend(store.completed().iter().map(|t| t.id.clone()));
        ids
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).cloned()
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.visible_ids().len();
        if len == 0 {
            return;
        }
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub((-delta) as usize)
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Overlays swallow input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(overlay) = &mut self.onboarding {
            match overlay.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.onboarding = None;
                }
                DialogResult::Submit(title) => {
                    self.onboarding = None;
                    let _ = self.board.store_mut().add(&title);
                    self.clamp_cursor();
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.upgrade {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                _ => self.upgrade = None,
            }
            return None;
        }

        if let Some((id, dialog)) = &mut self.date_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.date_dialog = None;
                }
                DialogResult::Submit(due) => {
                    let id = id.clone();
                    self.date_dialog = None;
                    let _ = self.board.store_mut().set_due(&id, due);
                }
            }
            return None;
        }

        if let Some((id, input)) = &mut self.rename_input {
            match key.code {
                KeyCode::Esc => {
                    self.rename_input = None;
                }
                KeyCode::Enter => {
                    let id = id.clone();
                    let title = input.value().to_string();
                    self.rename_input = None;
                    // Blank titles are silently rejected; the prior title stays.
                    let _ = self.board.store_mut().rename(&id, &title);
                }
                _ => {
                    input.handle_event(&crossterm::event::Event::Key(key));
                }
            }
            return None;
        }

        if let Some(input) = &mut self.add_input {
            match key.code {
                KeyCode::Esc => {
                    self.add_input = None;
                }
                KeyCode::Enter => {
                    let title = input.value().to_string();
                    if self.board.store_mut().add(&title).is_ok() {
                        self.add_input = None;
                        self.cursor = 0;
                    }
                    // Blank input: field stays open, like the original.
                }
                _ => {
                    input.handle_event(&crossterm::event::Event::Key(key));
                }
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Tab => {
                self.tab = self.tab.toggle();
            }
            KeyCode::Char('1') => {
                self.tab = ViewTab::Today;
            }
            KeyCode::Char('2') => {
                self.tab = ViewTab::Upcoming;
            }
            KeyCode::Char('o') => {
                self.onboarding = Some(OnboardingOverlay::new());
            }
            KeyCode::Char('U') => {
                let trigger = match self.tab {
                    ViewTab::Today => UpgradeTrigger::TaskLimit,
                    ViewTab::Upcoming => UpgradeTrigger::CalendarLimit,
                };
                self.upgrade = Some(UpgradeDialog::new(trigger));
            }
            KeyCode::Char('u') => {
                if self.board.undo() {
                    self.cursor = 0;
                }
            }
            // The task list and its selection only exist on the Today tab;
            // Upcoming is read-only.
            _ if self.tab != ViewTab::Today => {}
            KeyCode::Char('a') => {
                self.add_input = Some(Input::default());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_id() {
                    let _ = self.board.store_mut().toggle(&id);
                    self.clamp_cursor();
                }
            }
            KeyCode::Char('r') => {
                if let Some(id) = self.selected_id() {
                    if let Some(task) = self.board.store().get(&id) {
                        self.rename_input = Some((id.clone(), Input::new(task.title.clone())));
                    }
                }
            }
            KeyCode::Char('t') => {
                // Completed tasks don't take due dates, matching the original.
                if let Some(id) = self.selected_id() {
                    if let Some(task) = self.board.store().get(&id) {
                        if !task.completed {
                            self.date_dialog =
                                Some((id.clone(), DueDateDialog::new(&task.title, task.due)));
                        }
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    if let Some(task) = self.board.store().get(&id) {
                        if !task.completed {
                            self.board.delete(&id);
                            self.clamp_cursor();
                        }
                    }
                }
            }
            _ => {}
        }

        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        match self.tab {
            ViewTab::Today => self.render_today(frame, main_chunks[0], theme),
            ViewTab::Upcoming => self.render_upcoming(frame, main_chunks[0], theme),
        }
        self.render_status_bar(frame, main_chunks[1], theme);

        if let Some(title) = self.board.undo_toast_title() {
            UndoToast::render(frame, area, title, theme);
        }

        // Overlays on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
        if let Some((_, dialog)) = &self.date_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(overlay) = &self.onboarding {
            overlay.render(frame, area, theme);
        }
        if let Some(dialog) = &self.upgrade {
            dialog.render(frame, area, theme);
        }
    }

    fn render_today(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        self.render_task_pane(frame, chunks[0], theme);
        self.render_calendar_pane(frame, chunks[1], theme);
    }

    fn render_task_pane(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(
                " Today — {} ",
                self.today.format("%A, %b %-d")
            ))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        // Task capture input
        if let Some(input) = &self.add_input {
            render_text_field(frame, chunks[0], ">", input, theme);
        } else {
            let hint = Paragraph::new(Line::from(vec![
                Span::styled("a", Style::default().fg(theme.accent).bold()),
                Span::styled(" to add a task...", Style::default().fg(theme.dimmed)),
            ]));
            frame.render_widget(hint, chunks[0]);
        }

        let store = self.board.store();
        let incomplete = store.incomplete();
        let completed = store.completed();

        let mut lines: Vec<Line> = Vec::new();
        let mut row = 0usize;

        for task in &incomplete {
            lines.push(self.task_line(task, row == self.cursor, theme));
            row += 1;
        }

        if !completed.is_empty() {
            lines.push(Line::from(Span::styled(
                "── COMPLETED ──",
                Style::default().fg(theme.dimmed),
            )));
            for task in &completed {
                lines.push(self.task_line(task, row == self.cursor, theme));
                row += 1;
            }
        }

        if row == 0 {
            lines.push(Line::from(Span::styled(
                "No tasks yet",
                Style::default().fg(theme.dimmed),
            )));
        }

        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    fn task_line(&self, task: &crate::board::Task, is_selected: bool, theme: &Theme) -> Line<'static> {
        // Inline rename replaces the title row
        if let Some((id, input)) = &self.rename_input {
            if id == &task.id {
                return Line::from(vec![
                    Span::styled("[ ] ", Style::default().fg(theme.dimmed)),
                    Span::styled(
                        format!("{}█", input.value()),
                        Style::default().fg(theme.accent),
                    ),
                ]);
            }
        }

        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let title_style = if task.completed {
            Style::default().fg(theme.done).crossed_out()
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![
            Span::styled(checkbox.to_string(), Style::default().fg(theme.dimmed)),
            Span::styled(task.title.clone(), if is_selected {
                title_style.bold()
            } else {
                title_style
            }),
        ];

        if let Some(due) = task.due {
            let due_style = if task.is_overdue(self.today) {
                Style::default().fg(theme.overdue)
            } else {
                Style::default().fg(theme.dimmed)
            };
            spans.push(Span::styled(
                format!("  Due {}", due.format("%b %-d")),
                due_style,
            ));
        }

        let line = Line::from(spans);
        if is_selected {
            line.style(Style::default().bg(theme.selection))
        } else {
            line
        }
    }

    fn render_calendar_pane(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Calendar ")
            .title_style(Style::default().fg(theme.title));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.accent)),
                Span::styled(
                    "Google Calendar · Today",
                    Style::default().fg(theme.dimmed),
                ),
            ]),
            Line::from(""),
        ];

        for event in &self.today_events {
            lines.push(Line::from(vec![
                Span::styled("▎", Style::default().fg(theme.accent)),
                Span::styled(event.title.clone(), Style::default().fg(theme.text)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", event.time),
                Style::default().fg(theme.dimmed),
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_upcoming(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Upcoming — next 7 days ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let agenda = build_agenda(self.board.store(), self.today, &self.week_schedule);

        let mut lines: Vec<Line> = Vec::new();
        for day in &agenda {
            lines.push(Line::from(Span::styled(
                day.heading(),
                Style::default().fg(theme.hint).bold(),
            )));
            if day.is_clear() {
                lines.push(Line::from(Span::styled(
                    "  A clear day. Keep it that way.",
                    Style::default().fg(theme.dimmed).italic(),
                )));
            } else {
                for task in &day.tasks {
                    lines.push(Line::from(vec![
                        Span::styled("  [ ] ", Style::default().fg(theme.dimmed)),
                        Span::styled(task.title.clone(), Style::default().fg(theme.text)),
                    ]));
                }
                for event in &day.events {
                    lines.push(Line::from(vec![
                        Span::styled("   ·  ", Style::default().fg(theme.accent)),
                        Span::styled(
                            format!("{} · {}", event.title, event.time),
                            Style::default().fg(theme.dimmed),
                        ),
                    ]));
                }
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" Tab", key_style),
            Span::styled(
                match self.tab {
                    ViewTab::Today => " Upcoming ",
                    ViewTab::Upcoming => " Today ",
                },
                desc_style,
            ),
            Span::styled("│", sep_style),
            Span::styled(" a", key_style),
            Span::styled(" Add ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Space", key_style),
            Span::styled(" Toggle ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Delete ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" u", key_style),
            Span::styled(" Undo ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::seed;
    use crate::board::TaskStore;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 22).unwrap()
    }

    fn seeded_view() -> BoardView {
        BoardView::new(
            Board::seeded(),
            today(),
            seed::today_events(),
            seed::week_schedule(),
        )
    }

    fn empty_view() -> BoardView {
        BoardView::new(
            Board::new(TaskStore::new(), Duration::from_secs(3)),
            today(),
            Vec::new(),
            Vec::new(),
        )
    }

    fn type_str(view: &mut BoardView, s: &str) {
        for c in s.chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_q_returns_quit_action() {
        let mut view = seeded_view();
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn test_tab_toggles_view() {
        let mut view = seeded_view();
        assert_eq!(view.tab, ViewTab::Today);
        view.handle_key(key(KeyCode::Tab));
        assert_eq!(view.tab, ViewTab::Upcoming);
        view.handle_key(key(KeyCode::Tab));
        assert_eq!(view.tab, ViewTab::Today);
    }

    #[test]
    fn test_number_keys_select_tab() {
        let mut view = seeded_view();
        view.handle_key(key(KeyCode::Char('2')));
        assert_eq!(view.tab, ViewTab::Upcoming);
        view.handle_key(key(KeyCode::Char('1')));
        assert_eq!(view.tab, ViewTab::Today);
    }

    #[test]
    fn test_tab_switch_does_not_touch_store() {
        let mut view = seeded_view();
        let before = view.board.store().clone();
        view.handle_key(key(KeyCode::Tab));
        view.handle_key(key(KeyCode::Tab));
        assert_eq!(*view.board.store(), before);
    }

    #[test]
    fn test_question_mark_opens_and_closes_help() {
        let mut view = seeded_view();
        view.handle_key(key(KeyCode::Char('?')));
        assert!(view.show_help);
        view.handle_key(key(KeyCode::Char('?')));
        assert!(!view.show_help);
    }

    #[test]
    fn test_q_with_help_open_closes_help_not_app() {
        let mut view = seeded_view();
        view.show_help = true;
        let action = view.handle_key(key(KeyCode::Char('q')));
        assert!(action.is_none());
        assert!(!view.show_help);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut view = seeded_view();
        let count = view.visible_ids().len();
        for _ in 0..(count + 3) {
            view.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(view.cursor, count - 1);
        view.handle_key(key(KeyCode::Char('k')));
        assert_eq!(view.cursor, count - 2);
    }

    #[test]
    fn test_cursor_on_empty_board() {
        let mut view = empty_view();
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_add_flow() {
        let mut view = empty_view();
        view.handle_key(key(KeyCode::Char('a')));
        assert!(view.add_input.is_some());

        type_str(&mut view, "New task");
        view.handle_key(key(KeyCode::Enter));

        assert!(view.add_input.is_none());
        assert_eq!(view.board.store().len(), 1);
        assert_eq!(view.board.store().tasks()[0].title, "New task");
    }

    #[test]
    fn test_add_blank_keeps_input_open() {
        let mut view = empty_view();
        view.handle_key(key(KeyCode::Char('a')));
        view.handle_key(key(KeyCode::Enter));
        assert!(view.add_input.is_some());
        assert!(view.board.store().is_empty());
    }

    #[test]
    fn test_add_esc_cancels() {
        let mut view = empty_view();
        view.handle_key(key(KeyCode::Char('a')));
        type_str(&mut view, "discarded");
        view.handle_key(key(KeyCode::Esc));
        assert!(view.add_input.is_none());
        assert!(view.board.store().is_empty());
    }

    #[test]
    fn test_space_toggles_selected() {
        let mut view = seeded_view();
        let id = view.selected_id().unwrap();
        assert!(!view.board.store().get(&id).unwrap().completed);
        view.handle_key(key(KeyCode::Char(' ')));
        assert!(view.board.store().get(&id).unwrap().completed);
    }

    #[test]
    fn test_rename_flow() {
        let mut view = seeded_view();
        let id = view.selected_id().unwrap();

        view.handle_key(key(KeyCode::Char('r')));
        assert!(view.rename_input.is_some());

        // Prefilled with the current title; clear it and type a new one.
        let len = view.board.store().get(&id).unwrap().title.len();
        for _ in 0..len {
            view.handle_key(key(KeyCode::Backspace));
        }
        type_str(&mut view, "Renamed");
        view.handle_key(key(KeyCode::Enter));

        assert!(view.rename_input.is_none());
        assert_eq!(view.board.store().get(&id).unwrap().title, "Renamed");
    }

    #[test]
    fn test_rename_to_blank_keeps_title() {
        let mut view = seeded_view();
        let id = view.selected_id().unwrap();
        let original = view.board.store().get(&id).unwrap().title.clone();

        view.handle_key(key(KeyCode::Char('r')));
        let len = original.len();
        for _ in 0..len {
            view.handle_key(key(KeyCode::Backspace));
        }
        type_str(&mut view, "  ");
        view.handle_key(key(KeyCode::Enter));

        assert_eq!(view.board.store().get(&id).unwrap().title, original);
    }

    #[test]
    fn test_delete_and_undo_flow() {
        let mut view = seeded_view();
        let id = view.selected_id().unwrap();
        let count = view.board.store().len();

        view.handle_key(key(KeyCode::Char('d')));
        assert_eq!(view.board.store().len(), count - 1);
        assert!(view.board.undo_pending());

        view.handle_key(key(KeyCode::Char('u')));
        assert_eq!(view.board.store().len(), count);
        assert!(!view.board.undo_pending());
        // Restored to the front of the raw store.
        assert_eq!(view.board.store().tasks()[0].id, id);
    }

    #[test]
    fn test_undo_with_empty_buffer_is_noop() {
        let mut view = seeded_view();
        let before = view.board.store().clone();
        view.handle_key(key(KeyCode::Char('u')));
        assert_eq!(*view.board.store(), before);
    }

    #[test]
    fn test_delete_skips_completed_task() {
        let mut view = seeded_view();
        // Move to the last visible row, which is the completed task.
        let count = view.visible_ids().len();
        for _ in 0..count {
            view.handle_key(key(KeyCode::Char('j')));
        }
        let before = view.board.store().len();
        view.handle_key(key(KeyCode::Char('d')));
        assert_eq!(view.board.store().len(), before);
    }

    #[test]
    fn test_date_dialog_flow() {
        let mut view = seeded_view();
        let id = view.selected_id().unwrap();

        view.handle_key(key(KeyCode::Char('t')));
        assert!(view.date_dialog.is_some());

        // Clear the prefill and set a new date.
        for _ in 0..10 {
            view.handle_key(key(KeyCode::Backspace));
        }
        type_str(&mut view, "2026-02-25");
        view.handle_key(key(KeyCode::Enter));

        assert!(view.date_dialog.is_none());
        assert_eq!(
            view.board.store().get(&id).unwrap().due,
            Some(NaiveDate::from_ymd_opt(2026, 2, 25).unwrap())
        );
    }

    #[test]
    fn test_onboarding_open_and_finish_adds_task() {
        let mut view = empty_view();
        view.handle_key(key(KeyCode::Char('o')));
        assert!(view.onboarding.is_some());

        view.handle_key(key(KeyCode::Enter));
        view.handle_key(key(KeyCode::Enter));
        type_str(&mut view, "First task");
        view.handle_key(key(KeyCode::Enter));

        assert!(view.onboarding.is_none());
        assert_eq!(view.board.store().len(), 1);
        assert_eq!(view.board.store().tasks()[0].title, "First task");
    }

    #[test]
    fn test_upgrade_trigger_follows_tab() {
        let mut view = seeded_view();
        view.handle_key(key(KeyCode::Char('U')));
        assert_eq!(
            view.upgrade.as_ref().unwrap().trigger(),
            UpgradeTrigger::TaskLimit
        );
        view.handle_key(key(KeyCode::Esc));
        assert!(view.upgrade.is_none());

        view.handle_key(key(KeyCode::Tab));
        view.handle_key(key(KeyCode::Char('U')));
        assert_eq!(
            view.upgrade.as_ref().unwrap().trigger(),
            UpgradeTrigger::CalendarLimit
        );
    }

    #[test]
    fn test_task_keys_are_inert_on_upcoming_tab() {
        let mut view = seeded_view();
        view.handle_key(key(KeyCode::Tab));
        let before = view.board.store().clone();

        // The Today selection is hidden here; none of these may touch it.
        for code in [
            KeyCode::Char('a'),
            KeyCode::Char('j'),
            KeyCode::Char(' '),
            KeyCode::Char('r'),
            KeyCode::Char('t'),
            KeyCode::Char('d'),
        ] {
            view.handle_key(key(code));
        }

        assert_eq!(*view.board.store(), before);
        assert!(view.add_input.is_none());
        assert!(view.rename_input.is_none());
        assert!(view.date_dialog.is_none());
        assert!(!view.board.undo_pending());
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_task_keys_work_again_after_returning_to_today() {
        let mut view = seeded_view();
        view.handle_key(key(KeyCode::Tab));
        view.handle_key(key(KeyCode::Char('d')));
        view.handle_key(key(KeyCode::Char('1')));

        let before = view.board.store().len();
        view.handle_key(key(KeyCode::Char('d')));
        assert_eq!(view.board.store().len(), before - 1);
    }

    #[test]
    fn test_undo_still_works_on_upcoming_tab() {
        let mut view = seeded_view();
        let count = view.board.store().len();
        view.handle_key(key(KeyCode::Char('d')));
        view.handle_key(key(KeyCode::Tab));

        view.handle_key(key(KeyCode::Char('u')));
        assert_eq!(view.board.store().len(), count);
    }

    #[test]
    fn test_toast_clears_after_tick_expiry() {
        let mut view = BoardView::new(
            Board::new(
                {
                    let mut store = TaskStore::new();
                    store.add("t").unwrap();
                    store
                },
                Duration::ZERO,
            ),
            today(),
            Vec::new(),
            Vec::new(),
        );

        view.handle_key(key(KeyCode::Char('d')));
        assert!(view.board.undo_pending());
        assert!(view.tick(std::time::Instant::now()));
        assert!(!view.board.undo_pending());

        // Undo after expiry is a no-op; the task stays deleted.
        view.handle_key(key(KeyCode::Char('u')));
        assert!(view.board.store().is_empty());
    }
}
