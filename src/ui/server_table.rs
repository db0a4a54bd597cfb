use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::api::ServerRecord;
use crate::logic::gamemode::classify_map;
use crate::model::ServerModel;

const COLUMN_TITLES: [&str; 5] = ["Name", "Map", "Game Mode", "Players", "Region"];

/// Cell text for one server, in column order
fn row_cells(server: &ServerRecord) -> [String; 5] {
    [
        server.name.clone(),
        server.map.clone(),
        classify_map(&server.map).unwrap_or_default().to_string(),
        server.players.clone(),
        server.region.clone(),
    ]
}

/// Message shown in place of the table when there are no rows to draw
pub fn placeholder_message(servers: &ServerModel) -> Option<String> {
    if !servers.has_data() {
        if let Some(error) = &servers.error {
            return Some(error.message.clone());
        }
        return Some("Loading servers…".to_string());
    }
    if servers.filtered.is_empty() {
        return Some("No servers match the current filters".to_string());
    }
    None
}

/// Render the server table, or a centered placeholder when it would be empty
pub fn render_server_table(
    f: &mut Frame,
    area: Rect,
    servers: &ServerModel,
    selected: Option<usize>,
    is_focused: bool,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::White };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Servers")
        .border_style(Style::default().fg(border_color));

    if let Some(message) = placeholder_message(servers) {
        let style = if servers.error.is_some() && !servers.has_data() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        // Push the message down to the middle of the pane
        let padding = area.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::raw(""); padding as usize];
        lines.push(Line::styled(message, style));

        let placeholder = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(COLUMN_TITLES.iter().map(|title| Cell::from(*title)))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows = servers.filtered.iter().map(|server| Row::new(row_cells(server)));

    let widths = [
        Constraint::Min(20),
        Constraint::Length(20),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::errors::ErrorType;
    use crate::model::LoadError;
    use chrono::Local;

    fn server(map: &str) -> ServerRecord {
        ServerRecord {
            id: "1".to_string(),
            name: "Uncletopia".to_string(),
            map: map.to_string(),
            players: "20/24".to_string(),
            region: "EU".to_string(),
            address: "1.2.3.4:27015".to_string(),
        }
    }

    #[test]
    fn test_row_cells_include_gamemode() {
        let cells = row_cells(&server("koth_product"));
        assert_eq!(cells[2], "King of the Hill");
        assert_eq!(cells[3], "20/24");
    }

    #[test]
    fn test_row_cells_blank_gamemode_for_empty_map() {
        assert_eq!(row_cells(&server(""))[2], "");
    }

    #[test]
    fn test_placeholder_while_loading() {
        let servers = ServerModel::new();
        assert_eq!(placeholder_message(&servers).as_deref(), Some("Loading servers…"));
    }

    #[test]
    fn test_placeholder_shows_error_without_data() {
        let mut servers = ServerModel::new();
        servers.error = Some(LoadError {
            error_type: ErrorType::Timeout,
            message: "Could not load servers (Timeout). Press r to retry.".to_string(),
            detail: "operation timed out".to_string(),
        });
        assert_eq!(
            placeholder_message(&servers).as_deref(),
            Some("Could not load servers (Timeout). Press r to retry.")
        );
    }

    #[test]
    fn test_placeholder_for_empty_filter_result() {
        let mut servers = ServerModel::new();
        servers.last_updated = Some(Local::now());
        servers.servers = vec![server("cp_dustbowl")];
        assert_eq!(
            placeholder_message(&servers).as_deref(),
            Some("No servers match the current filters")
        );

        servers.filtered = servers.servers.clone();
        assert!(placeholder_message(&servers).is_none());
    }
}
