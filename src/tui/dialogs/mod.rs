//! TUI dialog components

mod due_date;
mod onboarding;
mod upgrade;

pub use due_date::DueDateDialog;
pub use onboarding::{OnboardingOverlay, OnboardingStep};
pub use upgrade::{UpgradeDialog, UpgradeTrigger};

use ratatui::prelude::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_centers_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
