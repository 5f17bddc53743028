use pagewindow::{Direction, Record, WindowStore};

/// Gate state for one expansion direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateState {
    /// Proximity signals are accepted.
    #[default]
    Idle,
    /// An expansion was applied and the resulting re-render has not settled yet.
    Pending,
}

/// What happened to a proximity signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProximityOutcome {
    /// The anchor moved one page and the direction is now pending.
    Advanced,
    /// Ignored: the previous expansion in this direction has not settled.
    Pending,
    /// Ignored: the anchor already sits on page 1 / the last page.
    AtBound,
    /// Ignored: top expansion waits for a user-initiated scroll.
    AwaitingUserScroll,
    /// Ignored: the expanding presentation is not active.
    Inactive,
}

impl ProximityOutcome {
    pub fn is_advanced(self) -> bool {
        matches!(self, Self::Advanced)
    }
}

/// Turns bursty "loader is fully visible" signals into at most one outstanding anchor advance
/// per direction.
///
/// A sentinel that stays visible keeps reporting while the window grows. Without a gate a
/// single sentinel would drain every page before the new items push it out of view. Each
/// direction therefore goes `Idle -> Pending` when it advances the store, and only returns to
/// `Idle` when the adapter calls [`AnchorCoordinator::settle`] after the re-render.
///
/// The top direction has one more gate: the top sentinel is usually visible right after
/// mount, so it only fires after the user scrolled (since mount or since the last top
/// expansion).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnchorCoordinator {
    top: GateState,
    bottom: GateState,
    user_scrolled: bool,
}

impl AnchorCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, direction: Direction) -> GateState {
        match direction {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
        }
    }

    pub fn is_pending(&self, direction: Direction) -> bool {
        self.state(direction) == GateState::Pending
    }

    pub fn has_user_scrolled(&self) -> bool {
        self.user_scrolled
    }

    /// Records a user-initiated scroll. Arms the top direction.
    pub fn on_user_scroll(&mut self) {
        self.user_scrolled = true;
    }

    /// Handles a proximity signal for `direction`, advancing `store` when the gates allow it.
    pub fn on_proximity<R: Record>(
        &mut self,
        direction: Direction,
        store: &mut WindowStore<R>,
    ) -> ProximityOutcome {
        if self.is_pending(direction) {
            atrace!(?direction, "on_proximity: pending");
            return ProximityOutcome::Pending;
        }
        if !store.can_advance(direction) {
            atrace!(?direction, "on_proximity: at bound");
            return ProximityOutcome::AtBound;
        }
        if direction == Direction::Top && !self.user_scrolled {
            atrace!("on_proximity: top suppressed until user scroll");
            return ProximityOutcome::AwaitingUserScroll;
        }

        if !store.advance(direction) {
            awarn!(?direction, "on_proximity: store refused advance");
            return ProximityOutcome::AtBound;
        }
        *self.slot_mut(direction) = GateState::Pending;
        if direction == Direction::Top {
            self.user_scrolled = false;
        }
        adebug!(
            ?direction,
            top_anchor = store.top_anchor(),
            bot_anchor = store.bot_anchor(),
            "on_proximity: advanced"
        );
        ProximityOutcome::Advanced
    }

    /// Marks the expansion in `direction` as applied and rendered.
    pub fn settle(&mut self, direction: Direction) {
        *self.slot_mut(direction) = GateState::Idle;
    }

    pub fn settle_all(&mut self) {
        self.top = GateState::Idle;
        self.bottom = GateState::Idle;
    }

    /// Drops any pending state and re-arms the top scroll gate, as on a fresh mount.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut GateState {
        match direction {
            Direction::Top => &mut self.top,
            Direction::Bottom => &mut self.bottom,
        }
    }
}
