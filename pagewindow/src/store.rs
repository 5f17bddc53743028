use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::num::NonZeroUsize;

use crate::filter::SearchIndex;
use crate::page::{clamp_page, last_page, page_span};
use crate::{Direction, Preload, Record, WindowError, WindowRange, WindowSnapshot};

/// A callback fired after a store action changes observable state.
pub type OnChangeCallback<R> = Arc<dyn Fn(&WindowStore<R>) + Send + Sync>;

/// Pagination state for one session: the filtered view, the current page, and how far the
/// rendered window has been expanded above and below it.
///
/// The store is the only writer of this state. Every action runs to completion and leaves the
/// following true on return:
///
/// - `1 <= top_anchor <= current_page <= bot_anchor <= last_page`
/// - `last_page == max(ceil(filtered_len / page_size), 1)`
/// - `previous_window` covers pages `top_anchor..current_page`
/// - `more_window` covers pages `current_page + 1..=bot_anchor`
///
/// Like the rest of this crate it holds no UI objects. Renderers read the windows and call the
/// actions in response to user input.
#[derive(Clone)]
pub struct WindowStore<R> {
    dataset: Vec<R>,
    index: SearchIndex,
    query: String,
    page_size: NonZeroUsize,
    filtered: Vec<usize>, // dataset positions, ascending

    current_page: usize,
    last_page: usize,
    top_anchor: usize,
    bot_anchor: usize,
    previous: WindowRange,
    more: WindowRange,

    on_change: Option<OnChangeCallback<R>>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

fn validate_page_size(page_size: usize) -> Result<NonZeroUsize, WindowError> {
    NonZeroUsize::new(page_size).ok_or(WindowError::InvalidPageSize {
        requested: page_size,
    })
}

impl<R: Record> WindowStore<R> {
    /// Creates a store from a preload snapshot.
    ///
    /// The requested page is clamped against the filtered view and both anchors start on it.
    pub fn new(preload: Preload<R>) -> Result<Self, WindowError> {
        let page_size = validate_page_size(preload.page_size)?;
        pdebug!(
            dataset = preload.dataset.len(),
            page = preload.current_page,
            page_size = preload.page_size,
            "WindowStore::new"
        );
        let mut store = Self {
            index: SearchIndex::new(&preload.dataset),
            dataset: preload.dataset,
            query: preload.query,
            page_size,
            filtered: Vec::new(),
            current_page: 1,
            last_page: 1,
            top_anchor: 1,
            bot_anchor: 1,
            previous: WindowRange::EMPTY,
            more: WindowRange::EMPTY,
            on_change: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        store.refilter();
        store.collapse_to(preload.current_page);
        Ok(store)
    }

    /// Replaces the whole session state with a new preload snapshot.
    ///
    /// The `on_change` observer is kept. On error nothing changes.
    pub fn initialize(&mut self, preload: Preload<R>) -> Result<(), WindowError> {
        let page_size = validate_page_size(preload.page_size)?;
        pdebug!(
            dataset = preload.dataset.len(),
            page = preload.current_page,
            page_size = preload.page_size,
            "initialize"
        );
        self.index = SearchIndex::new(&preload.dataset);
        self.dataset = preload.dataset;
        self.query = preload.query;
        self.page_size = page_size;
        self.refilter();
        self.collapse_to(preload.current_page);
        self.notify();
        Ok(())
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&WindowStore<R>) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple actions into a single `on_change` notification.
    ///
    /// Useful when a sync layer applies a query and a page size from the same navigation
    /// event: observers then see only the final state.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Jumps to `requested` (clamped into `[1, last_page]`) and collapses any expansion.
    pub fn set_current_page(&mut self, requested: usize) {
        let before = self.snapshot();
        self.collapse_to(requested);
        pdebug!(
            requested,
            current_page = self.current_page,
            last_page = self.last_page,
            "set_current_page"
        );
        if self.snapshot() != before {
            self.notify();
        }
    }

    /// Changes the page size, re-clamping the current page against the new page count.
    ///
    /// Rejects zero and keeps the previous size.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), WindowError> {
        let page_size = match validate_page_size(page_size) {
            Ok(size) => size,
            Err(err) => {
                pwarn!(requested = page_size, "set_page_size: rejected");
                return Err(err);
            }
        };
        self.page_size = page_size;
        self.last_page = last_page(self.filtered.len(), page_size);
        self.collapse_to(self.current_page);
        pdebug!(
            page_size = page_size.get(),
            current_page = self.current_page,
            last_page = self.last_page,
            "set_page_size"
        );
        self.notify();
        Ok(())
    }

    /// Re-filters the dataset with `query` and collapses any expansion.
    ///
    /// The current page is kept when it still exists, otherwise clamped to the new last page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
        self.collapse_to(self.current_page);
        pdebug!(
            filtered = self.filtered.len(),
            current_page = self.current_page,
            last_page = self.last_page,
            "set_query"
        );
        self.notify();
    }

    /// Grows the window by one page above the current page.
    ///
    /// Returns `false` (and changes nothing) when the top anchor is already on page 1.
    pub fn advance_top_anchor(&mut self) -> bool {
        if self.top_anchor <= 1 {
            ptrace!(top_anchor = self.top_anchor, "advance_top_anchor: at bound");
            return false;
        }
        self.top_anchor -= 1;
        self.previous = self.previous_span();
        debug_assert!(self.invariants_hold());
        pdebug!(
            top_anchor = self.top_anchor,
            items = self.previous.len(),
            "advance_top_anchor"
        );
        self.notify();
        true
    }

    /// Grows the window by one page below the current page.
    ///
    /// Returns `false` (and changes nothing) when the bottom anchor is already on the last page.
    pub fn advance_bot_anchor(&mut self) -> bool {
        if self.bot_anchor >= self.last_page {
            ptrace!(bot_anchor = self.bot_anchor, "advance_bot_anchor: at bound");
            return false;
        }
        self.bot_anchor += 1;
        self.more = self.more_span();
        debug_assert!(self.invariants_hold());
        pdebug!(
            bot_anchor = self.bot_anchor,
            items = self.more.len(),
            "advance_bot_anchor"
        );
        self.notify();
        true
    }

    pub fn advance(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.advance_top_anchor(),
            Direction::Bottom => self.advance_bot_anchor(),
        }
    }

    /// Whether `direction` still has pages left to expand into.
    pub fn can_advance(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top_anchor > 1,
            Direction::Bottom => self.bot_anchor < self.last_page,
        }
    }

    /// Collapses both anchors back onto the current page and clears both windows.
    pub fn reset_expansion(&mut self) {
        if self.top_anchor == self.current_page && self.bot_anchor == self.current_page {
            return;
        }
        self.collapse_to(self.current_page);
        pdebug!(current_page = self.current_page, "reset_expansion");
        self.notify();
    }

    fn refilter(&mut self) {
        self.filtered = self.index.matches(&self.query);
        self.last_page = last_page(self.filtered.len(), self.page_size);
    }

    fn collapse_to(&mut self, page: usize) {
        let page = clamp_page(page, self.last_page);
        self.current_page = page;
        self.top_anchor = page;
        self.bot_anchor = page;
        self.previous = WindowRange::EMPTY;
        self.more = WindowRange::EMPTY;
        debug_assert!(self.invariants_hold());
    }

    fn previous_span(&self) -> WindowRange {
        page_span(
            self.top_anchor,
            self.current_page - 1,
            self.page_size,
            self.filtered.len(),
        )
    }

    fn more_span(&self) -> WindowRange {
        page_span(
            self.current_page + 1,
            self.bot_anchor,
            self.page_size,
            self.filtered.len(),
        )
    }

    fn invariants_hold(&self) -> bool {
        1 <= self.top_anchor
            && self.top_anchor <= self.current_page
            && self.current_page <= self.bot_anchor
            && self.bot_anchor <= self.last_page
            && self.last_page == last_page(self.filtered.len(), self.page_size)
            && self.previous == self.previous_span()
            && self.more == self.more_span()
    }
}

impl<R> WindowStore<R> {
    pub fn dataset(&self) -> &[R] {
        &self.dataset
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    pub fn top_anchor(&self) -> usize {
        self.top_anchor
    }

    pub fn bot_anchor(&self) -> usize {
        self.bot_anchor
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Range of the filtered view prepended above the current page.
    pub fn previous_window(&self) -> WindowRange {
        self.previous
    }

    /// Range of the filtered view belonging to the current page.
    pub fn current_window(&self) -> WindowRange {
        page_span(
            self.current_page,
            self.current_page,
            self.page_size,
            self.filtered.len(),
        )
    }

    /// Range of the filtered view appended below the current page.
    pub fn more_window(&self) -> WindowRange {
        self.more
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = &R> + '_ {
        self.items_in(WindowRange::new(0, self.filtered.len()))
    }

    pub fn previous_window_items(&self) -> impl Iterator<Item = &R> + '_ {
        self.items_in(self.previous)
    }

    /// Items of the current page, i.e. what a server-side render of this page shows.
    pub fn current_window_items(&self) -> impl Iterator<Item = &R> + '_ {
        self.items_in(self.current_window())
    }

    pub fn more_window_items(&self) -> impl Iterator<Item = &R> + '_ {
        self.items_in(self.more)
    }

    /// Previous, current and more windows in render order.
    pub fn visible_items(&self) -> impl Iterator<Item = &R> + '_ {
        self.items_in(self.snapshot().visible())
    }

    /// Items on `page` (1-based). Empty for pages outside `[1, last_page]`.
    pub fn page_items(&self, page: usize) -> impl Iterator<Item = &R> + '_ {
        self.items_in(page_span(page, page, self.page_size, self.filtered.len()))
    }

    fn items_in(&self, range: WindowRange) -> impl Iterator<Item = &R> + '_ {
        let end = range.end_index.min(self.filtered.len());
        let start = range.start_index.min(end);
        self.filtered[start..end]
            .iter()
            .map(move |&pos| &self.dataset[pos])
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            current_page: self.current_page,
            last_page: self.last_page,
            page_size: self.page_size.get(),
            top_anchor: self.top_anchor,
            bot_anchor: self.bot_anchor,
            filtered_len: self.filtered.len(),
            previous: self.previous,
            current: self.current_window(),
            more: self.more,
        }
    }
}

impl<R> core::fmt::Debug for WindowStore<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowStore")
            .field("dataset_len", &self.dataset.len())
            .field("query", &self.query)
            .field("page_size", &self.page_size)
            .field("filtered_len", &self.filtered.len())
            .field("current_page", &self.current_page)
            .field("last_page", &self.last_page)
            .field("top_anchor", &self.top_anchor)
            .field("bot_anchor", &self.bot_anchor)
            .field("previous", &self.previous)
            .field("more", &self.more)
            .finish_non_exhaustive()
    }
}
