use crate::model::Focus;
use crate::App;
use ratatui::Frame;

use super::{filter_panel, header, layout, legend, server_table, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let ui = &app.model.ui;

    let layout_info = layout::calculate_layout(size, ui.vim_mode, ui.focus, ui.show_filters);

    header::render_header(f, layout_info.header_area, &app.model.servers, &app.base_url);

    if let Some(table_area) = layout_info.table_area {
        server_table::render_server_table(
            f,
            table_area,
            &app.model.servers,
            ui.selected_server,
            ui.focus == Focus::Table,
        );
    }

    if let Some(filter_area) = layout_info.filter_area {
        filter_panel::render_filter_panel(
            f,
            filter_area,
            &app.model.filters,
            ui.filter_cursor,
            ui.focus == Focus::Filters,
        );
    }

    legend::render_legend(f, layout_info.legend_area, ui.vim_mode, ui.focus, ui.show_filters);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.selected_server(),
        app.model.servers.error.as_ref(),
    );

    // Render toast notification if active
    if let Some(active) = &ui.toast {
        toast::render_toast(f, size, active);
    }
}
