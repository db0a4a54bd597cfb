//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Focus;
use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let vim_mode = app.model.ui.vim_mode;

    // Any key other than 'g' cancels a pending 'gg'
    let pending_g = std::mem::take(&mut app.model.ui.pending_g);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Esc => {
            // Leave the filter panel first, quit from the table
            if app.model.ui.focus == Focus::Filters {
                app.model.ui.focus = Focus::Table;
            } else {
                app.model.ui.should_quit = true;
            }
        }

        // ----- Navigation -----
        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Char('d') if vim_mode && ctrl => app.half_page_down(),
        KeyCode::Char('u') if vim_mode && ctrl => app.half_page_up(),
        KeyCode::PageDown => app.half_page_down(),
        KeyCode::PageUp => app.half_page_up(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_last(),
        KeyCode::Char('g') => {
            if !vim_mode || pending_g {
                app.jump_to_first();
            } else {
                // First 'g' pressed, waiting for second 'g'
                app.model.ui.pending_g = true;
            }
        }
        KeyCode::Tab | KeyCode::BackTab => app.model.ui.cycle_focus(),

        // ----- Actions -----
        KeyCode::Enter => match app.model.ui.focus {
            Focus::Table => app.join_selected_server(),
            Focus::Filters => app.model.toggle_filter_at_cursor(),
        },
        KeyCode::Char(' ') if app.model.ui.focus == Focus::Filters => {
            app.model.toggle_filter_at_cursor();
        }
        KeyCode::Char('c') => {
            // Copy address of the selected server
            app.copy_selected_address();
        }
        KeyCode::Char('r') => {
            // Force refresh (bypasses backend cache)
            app.fetch_servers(true);
        }

        // ----- Filters -----
        KeyCode::Char('f') => app.toggle_filter_panel(),
        KeyCode::Char('s') => app.model.cycle_player_sort(),
        KeyCode::Char('[') => app.model.lower_min_players(),
        KeyCode::Char(']') => app.model.raise_min_players(),
        KeyCode::Char('{') => app.model.lower_max_players(),
        KeyCode::Char('}') => app.model.raise_max_players(),
        KeyCode::Char('x') => {
            app.model.reset_filters();
            app.model.show_toast("Filters reset".to_string());
        }
        _ => {}
    }

    Ok(())
}
