use alloc::string::String;
use alloc::vec::Vec;

/// Page size used when a preload does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Initial snapshot a session starts from.
///
/// This is what a server-side render (or any other sync layer) hands to the engine: the full
/// dataset, the page the user asked for, the page size, and the active search query. The
/// requested page does not need to be valid; the store clamps it against the filtered view.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preload<R> {
    pub dataset: Vec<R>,
    pub current_page: usize,
    pub page_size: usize,
    pub query: String,
}

impl<R> Preload<R> {
    /// Creates a preload for `dataset` on page 1 with the default page size and no query.
    pub fn new(dataset: Vec<R>) -> Self {
        Self {
            dataset,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            query: String::new(),
        }
    }

    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

impl<R> Default for Preload<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
