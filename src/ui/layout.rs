use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::Focus;

/// Fixed width of the filter side panel
const FILTER_PANEL_WIDTH: u16 = 34;

/// Below this width the filter panel takes the whole content area
const MIN_TABLE_WIDTH: u16 = 50;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header bar area
    pub header_area: Rect,
    /// Server table area (absent when a narrow terminal gives the panel all the room)
    pub table_area: Option<Rect>,
    /// Filter panel area (if visible)
    pub filter_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool, focus: Focus, show_filters: bool) -> LayoutInfo {
    let legend_height =
        super::legend::calculate_legend_height(terminal_size.width, vim_mode, focus, show_filters);

    // header (top) + content + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (top border, text, bottom border)
            Constraint::Min(3),                // Content area (table + filter panel)
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[1];

    let (table_area, filter_area) = if !show_filters {
        (Some(content_area), None)
    } else if content_area.width < FILTER_PANEL_WIDTH + MIN_TABLE_WIDTH {
        // Not enough room for both; the panel wins while it is open
        (None, Some(content_area))
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(MIN_TABLE_WIDTH), Constraint::Length(FILTER_PANEL_WIDTH)])
            .split(content_area);
        (Some(chunks[0]), Some(chunks[1]))
    };

    LayoutInfo {
        header_area: main_chunks[0],
        table_area,
        filter_area,
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}
