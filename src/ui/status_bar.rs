use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::ServerRecord;
use crate::model::LoadError;
use crate::utils;

/// Widest server name shown before truncation
const NAME_WIDTH: usize = 40;

/// Status line for the selected server: name, address and raw player count
pub fn selected_server_text(server: &ServerRecord) -> String {
    format!(
        "{:<width$} │ {:>21} │ {:>7}",
        utils::truncate_to_width(&server.name, NAME_WIDTH),
        server.address,
        server.players,
        width = NAME_WIDTH
    )
}

/// Status line for a failed fetch: category plus the underlying cause
pub fn error_text(error: &LoadError) -> String {
    format!("{}: {}", error.error_type.as_str(), error.detail)
}

/// Render the bottom status bar
/// - After a failed fetch: the error category and detail
/// - Otherwise: the selected server, if any
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    selected: Option<&ServerRecord>,
    error: Option<&LoadError>,
) {
    let line = if let Some(error) = error {
        Line::from(Span::styled(error_text(error), Style::default().fg(Color::Red)))
    } else if let Some(server) = selected {
        Line::raw(selected_server_text(server))
    } else {
        Line::styled("No server selected", Style::default().fg(Color::DarkGray))
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::errors::ErrorType;

    #[test]
    fn test_selected_server_text() {
        let server = ServerRecord {
            id: "7".to_string(),
            name: "skial".to_string(),
            map: "pl_upward".to_string(),
            players: "23/24".to_string(),
            region: "NA".to_string(),
            address: "10.0.0.1:27015".to_string(),
        };
        let text = selected_server_text(&server);
        assert!(text.starts_with("skial "));
        assert!(text.contains("10.0.0.1:27015"));
        assert!(text.ends_with("23/24"));
    }

    #[test]
    fn test_selected_server_text_truncates_long_names() {
        let server = ServerRecord {
            id: "1".to_string(),
            name: "x".repeat(80),
            map: String::new(),
            players: "0/24".to_string(),
            region: String::new(),
            address: "1.1.1.1:1".to_string(),
        };
        assert!(selected_server_text(&server).contains('…'));
    }

    #[test]
    fn test_error_text() {
        let error = LoadError {
            error_type: ErrorType::ServerError,
            message: "Could not load servers (Backend error). Press r to retry.".to_string(),
            detail: "HTTP 502".to_string(),
        };
        assert_eq!(error_text(&error), "Backend error: HTTP 502");
    }
}
