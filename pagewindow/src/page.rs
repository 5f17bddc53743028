//! Page arithmetic. Pages are 1-based.

use core::num::NonZeroUsize;

use crate::WindowRange;

/// Number of pages needed for `filtered_len` items, never less than one.
///
/// An empty view still has a single (empty) page so that the current page always has a valid
/// value.
pub fn last_page(filtered_len: usize, page_size: NonZeroUsize) -> usize {
    filtered_len.div_ceil(page_size.get()).max(1)
}

/// Clamps `page` into `[1, last_page]`.
pub fn clamp_page(page: usize, last_page: usize) -> usize {
    page.min(last_page).max(1)
}

/// Item range covered by pages `first..=last` (1-based), clipped to `len`.
///
/// Returns an empty range when `first > last`.
pub fn page_span(first: usize, last: usize, page_size: NonZeroUsize, len: usize) -> WindowRange {
    if first == 0 || first > last {
        return WindowRange::EMPTY;
    }
    let size = page_size.get();
    let start = (first - 1).saturating_mul(size).min(len);
    let end = last.saturating_mul(size).min(len);
    WindowRange::new(start, end)
}
