use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::{EMAIL_MIN_HEIGHT, NOTIFICATION_WIDTH};

/// Screen regions of the composer form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerLayout {
    pub header: Rect,
    pub email: Rect,
    pub controls: Rect,
    pub error: Rect,
    pub reply: Rect,
    pub help: Rect,
}

/// Collapsed sections get a zero-height area.
pub fn compute(area: Rect, has_error: bool, has_reply: bool) -> ComposerLayout {
    let error_height = if has_error { 3 } else { 0 };
    let (email, reply) = if has_reply {
        (Constraint::Min(EMAIL_MIN_HEIGHT), Constraint::Percentage(45))
    } else {
        (Constraint::Min(EMAIL_MIN_HEIGHT), Constraint::Length(0))
    };
    let [header, email, controls, error, reply, help] = Layout::vertical([
        Constraint::Length(1),
        email,
        Constraint::Length(3),
        Constraint::Length(error_height),
        reply,
        Constraint::Length(1),
    ])
    .areas(area);

    ComposerLayout {
        header,
        email,
        controls,
        error,
        reply,
        help,
    }
}

/// Splits the controls row into tone selector and submit button.
pub fn split_controls(area: Rect) -> (Rect, Rect) {
    let [tone, submit] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(24)]).areas(area);
    (tone, submit)
}

/// Bottom-centred box for the notification, above the help line.
pub fn notification_area(area: Rect) -> Rect {
    let width = NOTIFICATION_WIDTH.min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: (area.y + area.height).saturating_sub(height + 1).max(area.y),
        width,
        height,
    }
}
