//! Timed rotation through a fixed list of display items
//!
//! Drives the hero's phrase slider: a cursor walks an ordered list and wraps
//! back to the start, one step per timer tick, for as long as the owning
//! view is mounted.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::lifecycle::{Liveness, Mounted, Subscription};

/// Default time each hero phrase stays on screen
pub const HERO_ROTATION_PERIOD: Duration = Duration::from_millis(3500);

/// One entry of a rotating display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationItem {
    pub text: String,
    pub emoji: String,
}

impl RotationItem {
    pub fn new(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: emoji.into(),
        }
    }
}

/// Ordered items plus the cursor of the one currently shown
#[derive(Debug, Clone, PartialEq)]
pub struct RotatingContent {
    items: Vec<RotationItem>,
    cursor: usize,
}

impl RotatingContent {
    pub fn new(items: Vec<RotationItem>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Move to the next item, wrapping to the first.
    ///
    /// Does nothing on an empty list.
    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    /// Return to the first item
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Item currently on display, `None` for an empty list
    pub fn current(&self) -> Option<&RotationItem> {
        self.items.get(self.cursor)
    }

    pub fn items(&self) -> &[RotationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether advancing can ever change what is displayed
    pub fn can_rotate(&self) -> bool {
        self.items.len() > 1
    }
}

/// Repeating timer primitive
pub trait Ticker {
    /// Call `on_tick` every `period` until the returned subscription is cancelled.
    ///
    /// Returns `None` when no timer could be started.
    fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Option<Subscription>;
}

/// Binds a [`RotatingContent`] to a [`Ticker`] for the lifetime of a mount
pub struct Rotator<T: Ticker> {
    ticker: T,
    period: Duration,
    content: Rc<RefCell<RotatingContent>>,
    on_change: Rc<dyn Fn(usize)>,
    mounted: Option<Mounted>,
}

impl<T: Ticker> Rotator<T> {
    pub fn new(
        ticker: T,
        items: Vec<RotationItem>,
        period: Duration,
        on_change: impl Fn(usize) + 'static,
    ) -> Self {
        Self {
            ticker,
            period,
            content: Rc::new(RefCell::new(RotatingContent::new(items))),
            on_change: Rc::new(on_change),
            mounted: None,
        }
    }

    /// Rewind to the first item and start the timer.
    ///
    /// Lists with fewer than two items are mounted without a timer since the
    /// displayed item could never change. Returns `false` if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.mounted.is_some() {
            return false;
        }

        let rewound = {
            let mut content = self.content.borrow_mut();
            let moved = content.index() != 0;
            content.reset();
            moved
        };
        if rewound {
            (self.on_change)(0);
        }

        let liveness = Liveness::new();
        let subscription = if self.content.borrow().can_rotate() {
            let callback = {
                let liveness = liveness.clone();
                let content = Rc::clone(&self.content);
                let on_change = Rc::clone(&self.on_change);
                move || {
                    if !liveness.is_alive() {
                        return;
                    }
                    let index = {
                        let mut content = content.borrow_mut();
                        content.advance();
                        content.index()
                    };
                    on_change(index);
                }
            };
            self.ticker.every(self.period, Box::new(callback))
        } else {
            None
        };

        self.mounted = Some(Mounted::new(liveness, subscription));
        true
    }

    /// Cancel the timer. Returns `false` if the rotator was not mounted.
    pub fn unmount(&mut self) -> bool {
        self.mounted.take().is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether a timer is currently running
    pub fn is_ticking(&self) -> bool {
        self.mounted.as_ref().is_some_and(Mounted::has_subscription)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn index(&self) -> usize {
        self.content.borrow().index()
    }

    pub fn current(&self) -> Option<RotationItem> {
        self.content.borrow().current().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<RotationItem> {
        vec![
            RotationItem::new("A", "✅"),
            RotationItem::new("B", "📦"),
            RotationItem::new("C", "💬"),
        ]
    }

    #[test]
    fn test_starts_at_first_item() {
        let content = RotatingContent::new(abc());
        assert_eq!(content.index(), 0);
        assert_eq!(content.current().map(|i| i.text.as_str()), Some("A"));
    }

    #[test]
    fn test_index_follows_tick_count() {
        for len in 1..=6 {
            let items = (0..len)
                .map(|i| RotationItem::new(format!("item {i}"), "🎧"))
                .collect();
            let mut content = RotatingContent::new(items);
            for k in 0..20 {
                assert_eq!(content.index(), k % len, "len={len} k={k}");
                content.advance();
            }
        }
    }

    #[test]
    fn test_wraps_from_last_to_first() {
        let mut content = RotatingContent::new(abc());
        content.advance();
        content.advance();
        assert_eq!(content.index(), 2);

        content.advance();
        assert_eq!(content.index(), 0);
    }

    #[test]
    fn test_displayed_sequence() {
        let mut content = RotatingContent::new(abc());
        let mut shown = Vec::new();
        for _ in 0..5 {
            shown.push(content.current().map(|i| i.text.clone()).unwrap_or_default());
            content.advance();
        }
        assert_eq!(shown, ["A", "B", "C", "A", "B"]);
    }

    #[test]
    fn test_empty_list_never_advances() {
        let mut content = RotatingContent::new(Vec::new());
        for _ in 0..3 {
            content.advance();
        }
        assert_eq!(content.index(), 0);
        assert!(content.current().is_none());
        assert!(content.is_empty());
        assert!(!content.can_rotate());
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut content = RotatingContent::new(vec![RotationItem::new("Solo", "🎹")]);
        content.advance();
        assert_eq!(content.index(), 0);
        assert!(!content.can_rotate());
    }

    #[test]
    fn test_duplicate_texts_allowed() {
        let mut content = RotatingContent::new(vec![
            RotationItem::new("Loop", "🔁"),
            RotationItem::new("Loop", "🔁"),
        ]);
        content.advance();
        assert_eq!(content.index(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_item() {
        let mut content = RotatingContent::new(abc());
        content.advance();
        content.advance();
        content.reset();
        assert_eq!(content.index(), 0);
        assert_eq!(content.current().map(|i| i.text.as_str()), Some("A"));
    }

    #[test]
    fn test_default_period() {
        assert_eq!(HERO_ROTATION_PERIOD.as_millis(), 3500);
    }
}
