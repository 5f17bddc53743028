use alloc::boxed::Box;

use pagewindow::Direction;

/// A callback invoked when a loader sentinel is judged fully visible.
pub type VisibleCallback = Box<dyn FnMut()>;

/// A viewport sensor for the two loader sentinels.
///
/// This is the only thing the engine needs from a visibility API (DOM `IntersectionObserver`,
/// a TUI's scroll math, ...): a callback per direction for "now fully visible", and a way to
/// stop observing.
pub trait ProximitySensor {
    /// Starts observing `direction`, replacing any previous callback for it.
    fn observe(&mut self, direction: Direction, on_fully_visible: VisibleCallback);

    /// Stops observing both directions and drops the callbacks.
    fn stop(&mut self);
}

/// A sensor driven by intersection ratios reported by the adapter.
///
/// Every report with a ratio of `1.0` (or more) fires the callback for that direction, so a
/// sentinel that is still fully visible after a re-render fires again on the next evaluation.
/// The coordinator's pending gate absorbs the repeats.
///
/// The last ratio per direction is kept so a loader can draw its progress.
pub struct RatioSensor {
    ratios: [f32; 2],
    callbacks: [Option<VisibleCallback>; 2],
}

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Top => 0,
        Direction::Bottom => 1,
    }
}

impl RatioSensor {
    pub fn new() -> Self {
        Self {
            ratios: [0.0; 2],
            callbacks: [None, None],
        }
    }

    /// Reports the current intersection ratio of a sentinel (`0.0..=1.0`).
    ///
    /// Returns `true` when the fully-visible callback fired.
    pub fn report(&mut self, direction: Direction, ratio: f32) -> bool {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        let i = slot(direction);
        self.ratios[i] = ratio;
        if ratio < 1.0 {
            return false;
        }
        match self.callbacks[i].as_mut() {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }

    /// Last reported ratio, for loader progress indicators.
    pub fn ratio(&self, direction: Direction) -> f32 {
        self.ratios[slot(direction)]
    }

    pub fn is_observing(&self, direction: Direction) -> bool {
        self.callbacks[slot(direction)].is_some()
    }
}

impl Default for RatioSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximitySensor for RatioSensor {
    fn observe(&mut self, direction: Direction, on_fully_visible: VisibleCallback) {
        self.callbacks[slot(direction)] = Some(on_fully_visible);
    }

    fn stop(&mut self) {
        self.callbacks = [None, None];
        self.ratios = [0.0; 2];
    }
}

impl core::fmt::Debug for RatioSensor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RatioSensor")
            .field("ratios", &self.ratios)
            .field("observing_top", &self.is_observing(Direction::Top))
            .field("observing_bottom", &self.is_observing(Direction::Bottom))
            .finish()
    }
}
