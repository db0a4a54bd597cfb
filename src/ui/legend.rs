use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::Focus;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, focus: Focus, show_filters: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("jk"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("g/G"),
            Span::raw(":First/Last  "),
        ]);
    }

    match focus {
        Focus::Table => {
            hotkey_spans.extend(vec![
                key("Enter"),
                Span::raw(":Join  "),
                key("c"),
                Span::raw(":Copy address  "),
            ]);
        }
        Focus::Filters => {
            hotkey_spans.extend(vec![
                key("Space"),
                Span::raw(":Toggle  "),
                key("Esc"),
                Span::raw(":Back to list  "),
            ]);
        }
    }

    hotkey_spans.extend(vec![
        key("f"),
        Span::raw(if show_filters { ":Hide filters  " } else { ":Filters  " }),
    ]);

    // Focus switching only makes sense with the panel open
    if show_filters {
        hotkey_spans.extend(vec![key("Tab"), Span::raw(":Switch pane  ")]);
    }

    hotkey_spans.extend(vec![
        key("s"),
        Span::raw(":Sort  "),
        key("[/]"),
        Span::raw(":Min players  "),
        key("{/}"),
        Span::raw(":Max players  "),
        key("x"),
        Span::raw(":Reset  "),
        key("r"),
        Span::raw(":Refresh  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, focus: Focus, show_filters: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, focus, show_filters));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with vim mode and the focused pane)
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, focus: Focus, show_filters: bool) {
    f.render_widget(build_legend_paragraph(vim_mode, focus, show_filters), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, focus: Focus, show_filters: bool) -> u16 {
    // Count lines without the block; line_count() is off by the borders otherwise
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, focus, show_filters));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
