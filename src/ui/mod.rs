// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, table, filter panel, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top bar (server counts, cache state, last refresh)
// - server_table: Renders the filtered server table
// - filter_panel: Renders region/gamemode toggles and player range
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (selected server or fetch error)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod filter_panel;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod server_table;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
