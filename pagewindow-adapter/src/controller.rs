use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use pagewindow::{Direction, Preload, Record, WindowError, WindowStore, clamp_page};

use crate::{
    AnchorCoordinator, DEFAULT_BREAKPOINT, PageLink, Presentation, ProximityOutcome,
    ProximitySensor, page_links,
};

type Inbox = Rc<RefCell<VecDeque<Direction>>>;

/// A framework-neutral controller that wraps a `pagewindow::WindowStore` and provides the
/// common adapter workflows (gated expansion, page selection, presentation switching).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` when the viewport is resized
/// - `on_user_scroll` when the user scrolls (wheel/touch/drag, not programmatic scrolls)
/// - `on_proximity` (or `connect` a [`ProximitySensor`] and call `pump`) when a loader
///   sentinel becomes fully visible
/// - `on_settled` once the re-render caused by an expansion has been committed
/// - `select_page` / `set_query` / `set_page_size` from the page selector and search controls
///
/// Any action that collapses the window also resets the coordinator, so a pending expansion
/// from before the collapse never blocks the next one.
#[derive(Debug)]
pub struct Controller<R> {
    store: WindowStore<R>,
    coordinator: AnchorCoordinator,
    presentation: Presentation,
    breakpoint: u32,
    inbox: Inbox,
}

impl<R: Record> Controller<R> {
    pub fn new(preload: Preload<R>, presentation: Presentation) -> Result<Self, WindowError> {
        Ok(Self::from_store(WindowStore::new(preload)?, presentation))
    }

    pub fn from_store(store: WindowStore<R>, presentation: Presentation) -> Self {
        Self {
            store,
            coordinator: AnchorCoordinator::new(),
            presentation,
            breakpoint: DEFAULT_BREAKPOINT,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn store(&self) -> &WindowStore<R> {
        &self.store
    }

    pub fn into_store(self) -> WindowStore<R> {
        self.store
    }

    pub fn coordinator(&self) -> &AnchorCoordinator {
        &self.coordinator
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&WindowStore<R>) + Send + Sync + 'static>,
    ) {
        self.store.set_on_change(on_change);
    }

    /// Switches presentation. Returns `true` when it changed.
    ///
    /// The two presentations never share expansion state: switching collapses the window,
    /// resets the coordinator and drops queued proximity signals.
    pub fn set_presentation(&mut self, presentation: Presentation) -> bool {
        if self.presentation == presentation {
            return false;
        }
        adebug!(?presentation, "set_presentation");
        self.presentation = presentation;
        self.collapse();
        true
    }

    /// Derives the presentation from a viewport width. Returns `true` when it changed.
    pub fn on_viewport_width(&mut self, width: u32) -> bool {
        self.set_presentation(Presentation::for_width(width, self.breakpoint))
    }

    pub fn on_user_scroll(&mut self) {
        self.coordinator.on_user_scroll();
    }

    /// Handles a "sentinel fully visible" signal.
    pub fn on_proximity(&mut self, direction: Direction) -> ProximityOutcome {
        if !self.presentation.is_expanding() {
            atrace!(?direction, "on_proximity: inactive");
            return ProximityOutcome::Inactive;
        }
        self.coordinator.on_proximity(direction, &mut self.store)
    }

    /// Call this once the expansion in `direction` has been rendered.
    pub fn on_settled(&mut self, direction: Direction) {
        self.coordinator.settle(direction);
    }

    pub fn is_pending(&self, direction: Direction) -> bool {
        self.coordinator.is_pending(direction)
    }

    /// Registers both directions with `sensor`. Signals are queued until [`Self::pump`].
    pub fn connect(&self, sensor: &mut impl ProximitySensor) {
        for direction in Direction::ALL {
            let inbox = Rc::clone(&self.inbox);
            sensor.observe(
                direction,
                Box::new(move || inbox.borrow_mut().push_back(direction)),
            );
        }
    }

    /// Stops `sensor` and drops signals it queued.
    pub fn disconnect(&mut self, sensor: &mut impl ProximitySensor) {
        sensor.stop();
        self.inbox.borrow_mut().clear();
    }

    /// Processes queued sensor signals in arrival order. Returns how many advanced the store.
    pub fn pump(&mut self) -> usize {
        let mut advanced = 0;
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            let Some(direction) = next else {
                break;
            };
            if self.on_proximity(direction).is_advanced() {
                advanced += 1;
            }
        }
        advanced
    }

    /// Jumps to `page` from the page selector. A page that clamps to the current one does
    /// nothing, so any expansion is kept.
    ///
    /// Returns `true` when the store changed page.
    pub fn select_page(&mut self, page: usize) -> bool {
        if clamp_page(page, self.store.last_page()) == self.store.current_page() {
            atrace!(page, "select_page: already current");
            return false;
        }
        self.store.set_current_page(page);
        self.drop_pending();
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.store.set_query(query);
        self.drop_pending();
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), WindowError> {
        self.store.set_page_size(page_size)?;
        self.drop_pending();
        Ok(())
    }

    /// Collapses the window onto the current page and resets the coordinator.
    pub fn reset_expansion(&mut self) {
        self.collapse();
    }

    /// Links for a page selector around the current page.
    pub fn page_links(&self, padding: usize) -> Vec<PageLink> {
        page_links(self.store.current_page(), self.store.last_page(), padding)
    }

    /// Whether the loader sentinel for `direction` should be rendered.
    pub fn loader_visible(&self, direction: Direction) -> bool {
        self.presentation.is_expanding() && self.store.can_advance(direction)
    }

    fn collapse(&mut self) {
        self.store.reset_expansion();
        self.drop_pending();
    }

    /// Forgets gate state and queued signals that refer to the window before a collapse.
    fn drop_pending(&mut self) {
        self.inbox.borrow_mut().clear();
        self.coordinator.reset();
    }
}
