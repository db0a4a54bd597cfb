//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! selection, panel focus, toasts, and visual state.

use std::time::Instant;

/// Which pane receives navigation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Table,
    Filters,
}

/// A brief pop-up message
#[derive(Clone, Debug)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
    /// Manual-connect hints stay up longer
    pub is_hint: bool,
}

/// UI preferences and transient visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether the last key was a lone 'g' (vim 'gg')
    pub pending_g: bool,

    // ============================================
    // PANES
    // ============================================
    /// Whether the filter panel is visible
    pub show_filters: bool,

    /// Pane receiving navigation keys
    pub focus: Focus,

    /// Selected row in the server table
    pub selected_server: Option<usize>,

    /// Highlighted row in the filter panel
    pub filter_cursor: Option<usize>,

    // ============================================
    // NOTIFICATIONS
    // ============================================
    /// Toast message
    pub toast: Option<Toast>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Whether the terminal window has focus (updated from focus events)
    pub terminal_focused: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            pending_g: false,
            show_filters: false,
            focus: Focus::Table,
            selected_server: None,
            filter_cursor: None,
            toast: None,
            terminal_focused: true,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, text: String) {
        self.toast = Some(Toast {
            text,
            shown_at: Instant::now(),
            is_hint: false,
        });
    }

    /// Show a lingering hint toast
    pub fn show_hint(&mut self, text: String) {
        self.toast = Some(Toast {
            text,
            shown_at: Instant::now(),
            is_hint: true,
        });
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some(toast) = &self.toast {
            crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis(), toast.is_hint)
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Show or hide the filter panel; hiding it hands focus back to the table
    pub fn toggle_filter_panel(&mut self) {
        self.show_filters = !self.show_filters;
        if !self.show_filters {
            self.focus = Focus::Table;
        }
    }

    /// Switch focus between table and filter panel (only while the panel is shown)
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Table if self.show_filters => Focus::Filters,
            _ => Focus::Table,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.vim_mode);
        assert!(!model.show_filters);
        assert_eq!(model.focus, Focus::Table);
        assert!(model.terminal_focused);
        assert!(!model.should_quit);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast.is_none());

        model.show_toast("Test".to_string());
        assert!(model.toast.as_ref().is_some_and(|t| !t.is_hint));
        assert!(!model.should_dismiss_toast());

        model.show_hint("connect 1.2.3.4".to_string());
        assert!(model.toast.as_ref().is_some_and(|t| t.is_hint));

        model.dismiss_toast();
        assert!(model.toast.is_none());
    }

    #[test]
    fn test_focus_requires_visible_panel() {
        let mut model = UiModel::new(false);
        model.cycle_focus();
        assert_eq!(model.focus, Focus::Table);

        model.toggle_filter_panel();
        model.cycle_focus();
        assert_eq!(model.focus, Focus::Filters);

        model.toggle_filter_panel();
        assert_eq!(model.focus, Focus::Table);
    }
}
