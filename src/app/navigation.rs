//! Selection movement
//!
//! Routes navigation keys to whichever pane has focus: the server table or
//! the filter panel.

use crate::logic::navigation;
use crate::model::Focus;
use crate::App;

/// Rows skipped by half-page jumps
const PAGE_SIZE: usize = 10;

impl App {
    fn focused_len(&self) -> usize {
        match self.model.ui.focus {
            Focus::Table => self.model.servers.filtered.len(),
            Focus::Filters => self.model.filters.entries().len(),
        }
    }

    fn update_focused_selection(&mut self, f: impl Fn(Option<usize>, usize) -> Option<usize>) {
        let len = self.focused_len();
        let selection = match self.model.ui.focus {
            Focus::Table => &mut self.model.ui.selected_server,
            Focus::Filters => &mut self.model.ui.filter_cursor,
        };
        *selection = f(*selection, len);
    }

    pub(crate) fn next_item(&mut self) {
        self.update_focused_selection(navigation::next_row);
    }

    pub(crate) fn previous_item(&mut self) {
        self.update_focused_selection(navigation::prev_row);
    }

    pub(crate) fn half_page_down(&mut self) {
        self.update_focused_selection(|current, len| navigation::page_down(current, len, PAGE_SIZE));
    }

    pub(crate) fn half_page_up(&mut self) {
        self.update_focused_selection(|current, len| navigation::page_up(current, len, PAGE_SIZE));
    }

    pub(crate) fn jump_to_first(&mut self) {
        self.update_focused_selection(|_, len| navigation::first_row(len));
    }

    pub(crate) fn jump_to_last(&mut self) {
        self.update_focused_selection(|_, len| navigation::last_row(len));
    }

    /// Show/hide the filter panel, placing the cursor on its first row
    pub(crate) fn toggle_filter_panel(&mut self) {
        self.model.ui.toggle_filter_panel();
        if self.model.ui.show_filters && self.model.ui.filter_cursor.is_none() {
            self.model.ui.filter_cursor = navigation::first_row(self.model.filters.entries().len());
        }
    }
}
