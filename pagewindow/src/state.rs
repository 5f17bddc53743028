use crate::WindowRange;

/// A lightweight, serializable snapshot of the pagination state.
///
/// Ranges index into the filtered view. `previous`, `current` and `more` are contiguous and
/// in render order.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    pub current_page: usize,
    pub last_page: usize,
    pub page_size: usize,
    pub top_anchor: usize,
    pub bot_anchor: usize,
    pub filtered_len: usize,
    pub previous: WindowRange,
    pub current: WindowRange,
    pub more: WindowRange,
}

impl WindowSnapshot {
    /// Range spanning everything currently rendered (previous, current and more windows).
    pub fn visible(&self) -> WindowRange {
        let start = if self.previous.is_empty() {
            self.current.start_index
        } else {
            self.previous.start_index
        };
        let end = if self.more.is_empty() {
            self.current.end_index
        } else {
            self.more.end_index
        };
        WindowRange::new(start, end)
    }

    /// Whether the window has grown beyond the current page in either direction.
    pub fn is_expanded(&self) -> bool {
        self.top_anchor != self.current_page || self.bot_anchor != self.current_page
    }
}
