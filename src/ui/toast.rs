use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::Toast;

/// Icon and border color for a toast
fn toast_style(toast: &Toast) -> (&'static str, Color) {
    if toast.text.starts_with("Error:") {
        ("✗ ", Color::Red)
    } else if toast.is_hint {
        ("ℹ ", Color::Yellow)
    } else {
        ("✓ ", Color::Green)
    }
}

/// Toast size (width, height) for a message inside `area`
fn toast_size(area: Rect, message: &str) -> (u16, u16) {
    let max_width = (area.width as usize).min(80);
    let toast_width = (message.width() + 6).min(max_width);

    // Borders + padding eat 4 columns; long hints wrap onto extra lines
    let text_width = toast_width.saturating_sub(4).max(1);
    let lines = (message.width() + 2).div_ceil(text_width).max(1);
    let toast_height = (lines + 2).min(area.height as usize);

    (toast_width as u16, toast_height as u16)
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    let (toast_width, toast_height) = toast_size(area, &toast.text);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + 3.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = toast_style(toast);
    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(toast.text.as_str()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn toast(text: &str, is_hint: bool) -> Toast {
        Toast {
            text: text.to_string(),
            shown_at: Instant::now(),
            is_hint,
        }
    }

    #[test]
    fn test_toast_style_by_kind() {
        assert_eq!(toast_style(&toast("Copied 1.2.3.4", false)).1, Color::Green);
        assert_eq!(toast_style(&toast("Error: launch failed", false)).1, Color::Red);
        assert_eq!(toast_style(&toast("Paste into console", true)).1, Color::Yellow);
    }

    #[test]
    fn test_short_toast_is_single_line() {
        let (width, height) = toast_size(Rect::new(0, 0, 120, 40), "Filters reset");
        assert_eq!(width, 19);
        assert_eq!(height, 3);
    }

    #[test]
    fn test_long_toast_wraps_within_80_columns() {
        let message = "a".repeat(200);
        let (width, height) = toast_size(Rect::new(0, 0, 120, 40), &message);
        assert_eq!(width, 80);
        assert!(height > 3);
    }
}
