use core::fmt;
use core::ops;

/// An item that can be paged and searched.
///
/// The engine never looks at a record beyond its identifier and the two text fields the
/// search filter reads. The search key is `display_name` followed by `short_code`, so a query
/// may match across the boundary (e.g. `"anceFRA"` matches `"France" + "FRA"`).
pub trait Record {
    type Id: Clone + Eq + fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Human-readable name (e.g. a country's common name).
    fn display_name(&self) -> &str;

    /// Short code appended to the name when searching (e.g. an ISO alpha-3 code).
    fn short_code(&self) -> &str;
}

/// One of the two expansion directions of the visible window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards page 1 (items prepended above the current page).
    Top,
    /// Towards the last page (items appended below the current page).
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Top, Direction::Bottom];

    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// A half-open range of positions in the filtered view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub const EMPTY: WindowRange = WindowRange {
        start_index: 0,
        end_index: 0,
    };

    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn as_range(&self) -> ops::Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

impl From<WindowRange> for ops::Range<usize> {
    fn from(r: WindowRange) -> Self {
        r.as_range()
    }
}
