//! TUI theme and styling

use ratatui::style::Color;
use tracing::warn;

pub const AVAILABLE_THEMES: &[&str] = &["paper", "phosphor"];

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task styling
    pub overdue: Color,
    pub done: Color,

    // UI elements
    pub accent: Color,
    pub toast_bg: Color,
    pub toast_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

impl Theme {
    /// Light scheme matching the original Focus mockup: near-white surfaces,
    /// black accents.
    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            border: Color::Rgb(229, 231, 235),
            selection: Color::Rgb(243, 244, 246),

            title: Color::Rgb(17, 24, 39),
            text: Color::Rgb(31, 41, 55),
            dimmed: Color::Rgb(156, 163, 175),
            hint: Color::Rgb(107, 114, 128),

            overdue: Color::Rgb(239, 68, 68),
            done: Color::Rgb(156, 163, 175),

            accent: Color::Rgb(17, 24, 39),
            toast_bg: Color::Rgb(31, 41, 55),
            toast_text: Color::Rgb(255, 255, 255),
        }
    }

    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            overdue: Color::Rgb(255, 100, 80),
            done: Color::Rgb(60, 100, 70),

            accent: Color::Rgb(57, 255, 20),
            toast_bg: Color::Rgb(30, 50, 40),
            toast_text: Color::Rgb(180, 255, 180),
        }
    }

    /// Look up a theme by config name, falling back to paper.
    pub fn by_name(name: &str) -> Self {
        match name {
            "" | "paper" => Self::paper(),
            "phosphor" => Self::phosphor(),
            other => {
                warn!("Unknown theme '{}', falling back to paper", other);
                Self::paper()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_paper() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_by_name_selects_phosphor() {
        let theme = Theme::by_name("phosphor");
        assert_eq!(theme.title, Color::Rgb(57, 255, 20));
    }

    #[test]
    fn test_unknown_name_falls_back_to_paper() {
        let theme = Theme::by_name("no-such-theme");
        assert_eq!(theme.background, Theme::paper().background);
    }

    #[test]
    fn test_available_themes_resolve() {
        for name in AVAILABLE_THEMES {
            let _ = Theme::by_name(name);
        }
    }
}
