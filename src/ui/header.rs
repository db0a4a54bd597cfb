use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::ServerModel;

/// "Showing N of M servers" summary, or a loading notice before the first list arrives
pub fn server_count_text(servers: &ServerModel) -> String {
    if !servers.has_data() {
        return if servers.loading {
            "Loading servers…".to_string()
        } else {
            "No server data".to_string()
        };
    }
    format!(
        "Showing {} of {} servers",
        servers.filtered.len(),
        servers.servers.len()
    )
}

/// Where the current list came from: the backend cache (with its age) or a live query
pub fn freshness_text(servers: &ServerModel) -> Option<String> {
    let updated = servers.last_updated?;
    let source = if servers.from_cache {
        match &servers.cache_age {
            Some(age) => format!("cached {}", age),
            None => "cached".to_string(),
        }
    } else {
        "live".to_string()
    };
    Some(format!("{} · updated {}", source, updated.format("%H:%M:%S")))
}

/// Render the top header bar
pub fn render_header(f: &mut Frame, area: Rect, servers: &ServerModel, base_url: &str) {
    let mut spans = vec![
        Span::styled(
            "TrueQuickplay",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::raw(server_count_text(servers)),
    ];

    if let Some(freshness) = freshness_text(servers) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(freshness, Style::default().fg(Color::Gray)));
    }

    // A refresh in flight while the old list is still on screen
    if servers.loading && servers.has_data() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Refreshing…", Style::default().fg(Color::Yellow)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(base_url.to_string(), Style::default().fg(Color::DarkGray))),
    );
    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_count_text_before_first_load() {
        let mut servers = ServerModel::new();
        assert_eq!(server_count_text(&servers), "No server data");
        servers.loading = true;
        assert_eq!(server_count_text(&servers), "Loading servers…");
    }

    #[test]
    fn test_count_text_with_data() {
        let mut servers = ServerModel::new();
        servers.last_updated = Some(Local::now());
        assert_eq!(server_count_text(&servers), "Showing 0 of 0 servers");
    }

    #[test]
    fn test_freshness_text() {
        let mut servers = ServerModel::new();
        assert!(freshness_text(&servers).is_none());

        servers.last_updated = Local.with_ymd_and_hms(2024, 5, 1, 13, 4, 5).single();
        assert_eq!(freshness_text(&servers).as_deref(), Some("live · updated 13:04:05"));

        servers.from_cache = true;
        servers.cache_age = Some("42s".to_string());
        assert_eq!(
            freshness_text(&servers).as_deref(),
            Some("cached 42s · updated 13:04:05")
        );
    }
}
