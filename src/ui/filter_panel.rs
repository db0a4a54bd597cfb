use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{FilterEntry, FilterState};

fn section_title(title: &'static str) -> Line<'static> {
    Line::styled(title, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
}

/// Build the panel lines and the index of the line holding the cursor
///
/// Layout: region toggles, game mode toggles, then sort order and player range.
pub fn build_filter_lines(
    filters: &FilterState,
    cursor: Option<usize>,
    is_focused: bool,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut cursor_line = None;

    let entries = filters.entries();
    if entries.is_empty() {
        lines.push(Line::styled(
            "No filters until servers load",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut previous_kind = None;
    for (idx, entry) in entries.iter().enumerate() {
        let (kind, label) = match entry {
            FilterEntry::Region(region) => ("Regions", region.as_str()),
            FilterEntry::Gamemode(gamemode) => ("Game Modes", gamemode.as_str()),
        };

        if previous_kind != Some(kind) {
            if previous_kind.is_some() {
                lines.push(Line::raw(""));
            }
            lines.push(section_title(kind));
            previous_kind = Some(kind);
        }

        let enabled = filters.is_enabled(entry);
        let checkbox = if enabled { "[x] " } else { "[ ] " };
        let mut style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let is_cursor = cursor == Some(idx);
        if is_cursor {
            cursor_line = Some(lines.len());
            if is_focused {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
        }

        let marker = if is_cursor && is_focused { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{}", checkbox, label), style),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(section_title("Players"));
    lines.push(Line::raw(format!(
        "  Range: {} – {}",
        filters.min_players, filters.max_players
    )));
    lines.push(Line::raw(format!("  Sort:  {}", filters.player_sort.as_str())));

    (lines, cursor_line)
}

/// Scroll offset that keeps `cursor_line` inside a viewport of `height` lines
fn scroll_offset(cursor_line: Option<usize>, height: u16) -> u16 {
    match cursor_line {
        Some(line) if line >= height as usize => (line + 1 - height as usize) as u16,
        _ => 0,
    }
}

/// Render the filter side panel
pub fn render_filter_panel(
    f: &mut Frame,
    area: Rect,
    filters: &FilterState,
    cursor: Option<usize>,
    is_focused: bool,
) {
    let (lines, cursor_line) = build_filter_lines(filters, cursor, is_focused);
    let inner_height = area.height.saturating_sub(2);

    let border_color = if is_focused { Color::Cyan } else { Color::White };
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filters")
                .border_style(Style::default().fg(border_color)),
        )
        .scroll((scroll_offset(cursor_line, inner_height), 0));

    f.render_widget(panel, area);
}
