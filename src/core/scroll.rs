//! Scroll-derived UI state
//!
//! Turns the document's scroll metrics into the values the chrome needs:
//! a progress percentage for the reading bar and a "past threshold" flag
//! for the back-to-top button and the header's scrolled style.
//!
//! # Usage Example
//!
//! ```rust
//! use bedroom_producers::core::scroll::{ScrollMetrics, ScrollState};
//!
//! let mut state = ScrollState::new(300.0);
//! let snapshot = state.apply(Some(ScrollMetrics::new(250.0, 500.0, 1000.0)));
//!
//! assert_eq!(snapshot.progress, 50.0);
//! assert!(!snapshot.past_threshold);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::lifecycle::{Liveness, Mounted, Subscription};

/// Scroll offset after which the back-to-top button appears
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Scroll offset after which the header switches to its scrolled style
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Raw measurements read from the scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Distance the viewport can travel, never negative
    pub fn scrollable_height(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Percentage of the scrollable distance traversed, in `[0, 100]`.
    ///
    /// A page that fits in the viewport reports `0`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable_height();
        if scrollable <= 0.0 {
            return 0.0;
        }

        let percent = self.scroll_top / scrollable * 100.0;
        if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Strictly greater-than comparison against `threshold_px`
    pub fn is_past(&self, threshold_px: f64) -> bool {
        self.scroll_top > threshold_px
    }
}

/// Values derived from one reading of the scroll metrics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    /// Scroll progress in percent
    pub progress: f64,
    /// Whether the scroll offset exceeds the configured threshold
    pub past_threshold: bool,
}

/// Per-instance scroll state with one pixel threshold
#[derive(Debug, Clone)]
pub struct ScrollState {
    threshold_px: f64,
    snapshot: ScrollSnapshot,
}

impl ScrollState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            snapshot: ScrollSnapshot::default(),
        }
    }

    /// Recompute from fresh metrics.
    ///
    /// `None` means the scroll container could not be measured; the state
    /// falls back to the default snapshot.
    pub fn apply(&mut self, metrics: Option<ScrollMetrics>) -> ScrollSnapshot {
        self.snapshot = match metrics {
            Some(metrics) => ScrollSnapshot {
                progress: metrics.progress(),
                past_threshold: metrics.is_past(self.threshold_px),
            },
            None => ScrollSnapshot::default(),
        };
        self.snapshot
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }
}

/// Something that can be measured and that reports scroll/resize changes
pub trait ScrollSource {
    /// Current metrics, or `None` when there is nothing to measure
    fn metrics(&self) -> Option<ScrollMetrics>;

    /// Register `on_scroll` for scroll and resize notifications.
    ///
    /// Returns `None` when the source cannot register listeners.
    fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Option<Subscription>;
}

/// Binds a [`ScrollState`] to a [`ScrollSource`] for the lifetime of a mount
pub struct ScrollTracker<S: ScrollSource> {
    source: S,
    state: Rc<RefCell<ScrollState>>,
    on_change: Rc<dyn Fn(ScrollSnapshot)>,
    mounted: Option<Mounted>,
}

impl<S> ScrollTracker<S>
where
    S: ScrollSource + Clone + 'static,
{
    pub fn new(source: S, threshold_px: f64, on_change: impl Fn(ScrollSnapshot) + 'static) -> Self {
        Self {
            source,
            state: Rc::new(RefCell::new(ScrollState::new(threshold_px))),
            on_change: Rc::new(on_change),
            mounted: None,
        }
    }

    /// Take an initial reading and start listening.
    ///
    /// Returns `false` without subscribing again if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.mounted.is_some() {
            return false;
        }

        let liveness = Liveness::new();
        Self::refresh(&self.source, &self.state, self.on_change.as_ref());

        let callback = {
            let liveness = liveness.clone();
            let source = self.source.clone();
            let state = Rc::clone(&self.state);
            let on_change = Rc::clone(&self.on_change);
            move || {
                if liveness.is_alive() {
                    Self::refresh(&source, &state, on_change.as_ref());
                }
            }
        };

        let subscription = self.source.subscribe(Box::new(callback));
        if subscription.is_none() {
            tracing::debug!("scroll source unavailable, keeping default snapshot");
        }
        self.mounted = Some(Mounted::new(liveness, subscription));
        true
    }

    /// Stop listening. Returns `false` if the tracker was not mounted.
    pub fn unmount(&mut self) -> bool {
        self.mounted.take().is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether a listener is currently registered with the source
    pub fn is_listening(&self) -> bool {
        self.mounted.as_ref().is_some_and(Mounted::has_subscription)
    }

    /// Last computed snapshot; after unmount this is the final value
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.state.borrow().snapshot()
    }

    fn refresh(source: &S, state: &RefCell<ScrollState>, on_change: &dyn Fn(ScrollSnapshot)) {
        let snapshot = state.borrow_mut().apply(source.metrics());
        on_change(snapshot);
    }
}
