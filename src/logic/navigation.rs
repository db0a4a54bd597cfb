//! Row navigation
//!
//! Pure functions for moving a selection through the server table and the
//! filter panel. Single steps wrap around; page steps stop at the edges.

/// Move one row down, wrapping to the top
///
/// # Examples
/// ```
/// use quickplaytui::logic::navigation::next_row;
///
/// assert_eq!(next_row(None, 0), None);
/// assert_eq!(next_row(None, 3), Some(0));
/// assert_eq!(next_row(Some(1), 3), Some(2));
/// assert_eq!(next_row(Some(2), 3), Some(0));
/// ```
pub fn next_row(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move one row up, wrapping to the bottom
pub fn prev_row(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    })
}

/// Jump `page` rows down without wrapping
pub fn page_down(current: Option<usize>, len: usize, page: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(0, |i| i.saturating_add(page)).min(len - 1))
}

/// Jump `page` rows up without wrapping
pub fn page_up(current: Option<usize>, len: usize, page: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(current.map_or(0, |i| i.saturating_sub(page)).min(len - 1))
}

pub fn first_row(len: usize) -> Option<usize> {
    (len > 0).then_some(0)
}

pub fn last_row(len: usize) -> Option<usize> {
    len.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_row_wraps() {
        assert_eq!(next_row(Some(0), 1), Some(0));
        assert_eq!(next_row(Some(4), 5), Some(0));
        assert_eq!(next_row(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_row_wraps() {
        assert_eq!(prev_row(None, 3), Some(2));
        assert_eq!(prev_row(Some(0), 3), Some(2));
        assert_eq!(prev_row(Some(2), 3), Some(1));
        assert_eq!(prev_row(None, 0), None);
    }

    #[test]
    fn test_prev_row_out_of_bounds_clamps() {
        // Selection left over from a longer list
        assert_eq!(prev_row(Some(10), 3), Some(2));
    }

    #[test]
    fn test_page_moves_stop_at_edges() {
        assert_eq!(page_down(Some(2), 5, 10), Some(4));
        assert_eq!(page_down(None, 5, 10), Some(0));
        assert_eq!(page_up(Some(2), 5, 10), Some(0));
        assert_eq!(page_up(Some(9), 5, 2), Some(4));
        assert_eq!(page_down(Some(0), 0, 10), None);
    }

    #[test]
    fn test_first_and_last_row() {
        assert_eq!(first_row(0), None);
        assert_eq!(last_row(0), None);
        assert_eq!(first_row(4), Some(0));
        assert_eq!(last_row(4), Some(3));
    }
}
