#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use crate::core::lifecycle::Subscription;
    use crate::core::rotation::{HERO_ROTATION_PERIOD, RotationItem, Rotator, Ticker};
    use crate::core::scroll::{
        BACK_TO_TOP_THRESHOLD_PX, HEADER_SCROLL_THRESHOLD_PX, ScrollMetrics, ScrollSnapshot,
        ScrollSource, ScrollTracker,
    };
    use crate::core::site::hero_phrases;

    // ========================================================================
    // Test doubles
    // ========================================================================

    type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

    #[derive(Default)]
    struct ScrollHost {
        metrics: Cell<Option<ScrollMetrics>>,
        listeners: RefCell<Vec<(usize, Listener)>>,
        next_id: Cell<usize>,
        subscribes: Cell<usize>,
        cancels: Cell<usize>,
        /// Refuse subscriptions, like a server render without a window
        unavailable: Cell<bool>,
    }

    /// Scroll source driven by hand
    #[derive(Clone, Default)]
    struct ManualScrollSource(Rc<ScrollHost>);

    impl ManualScrollSource {
        fn with_page(viewport_height: f64, document_height: f64) -> Self {
            let source = Self::default();
            source
                .0
                .metrics
                .set(Some(ScrollMetrics::new(0.0, viewport_height, document_height)));
            source
        }

        fn unavailable() -> Self {
            let source = Self::default();
            source.0.unavailable.set(true);
            source
        }

        /// Move the viewport and notify every registered listener
        fn scroll_to(&self, scroll_top: f64) {
            if let Some(mut metrics) = self.0.metrics.get() {
                metrics.scroll_top = scroll_top;
                self.0.metrics.set(Some(metrics));
            }
            self.fire();
        }

        fn fire(&self) {
            // Clone the listeners out so callbacks never run under a borrow
            let listeners: Vec<Listener> = self
                .0
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                (listener.borrow_mut())();
            }
        }

        fn active(&self) -> usize {
            self.0.listeners.borrow().len()
        }

        fn subscribes(&self) -> usize {
            self.0.subscribes.get()
        }

        fn cancels(&self) -> usize {
            self.0.cancels.get()
        }
    }

    impl ScrollSource for ManualScrollSource {
        fn metrics(&self) -> Option<ScrollMetrics> {
            self.0.metrics.get()
        }

        fn subscribe(&self, on_scroll: Box<dyn FnMut()>) -> Option<Subscription> {
            if self.0.unavailable.get() {
                return None;
            }

            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            self.0.subscribes.set(self.0.subscribes.get() + 1);
            self.0
                .listeners
                .borrow_mut()
                .push((id, Rc::new(RefCell::new(on_scroll))));

            let host = Rc::clone(&self.0);
            Some(Subscription::new(move || {
                host.cancels.set(host.cancels.get() + 1);
                host.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }))
        }
    }

    #[derive(Default)]
    struct TickerHost {
        timers: RefCell<Vec<(usize, Duration, Listener)>>,
        next_id: Cell<usize>,
        starts: Cell<usize>,
        cancels: Cell<usize>,
    }

    /// Ticker whose timers fire only when told to
    #[derive(Clone, Default)]
    struct ManualTicker(Rc<TickerHost>);

    impl ManualTicker {
        fn tick(&self) {
            let timers: Vec<Listener> = self
                .0
                .timers
                .borrow()
                .iter()
                .map(|(_, _, listener)| Rc::clone(listener))
                .collect();
            for timer in timers {
                (timer.borrow_mut())();
            }
        }

        fn active(&self) -> usize {
            self.0.timers.borrow().len()
        }

        fn starts(&self) -> usize {
            self.0.starts.get()
        }

        fn cancels(&self) -> usize {
            self.0.cancels.get()
        }

        fn periods(&self) -> Vec<Duration> {
            self.0.timers.borrow().iter().map(|(_, p, _)| *p).collect()
        }
    }

    impl Ticker for ManualTicker {
        fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Option<Subscription> {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            self.0.starts.set(self.0.starts.get() + 1);
            self.0
                .timers
                .borrow_mut()
                .push((id, period, Rc::new(RefCell::new(on_tick))));

            let host = Rc::clone(&self.0);
            Some(Subscription::new(move || {
                host.cancels.set(host.cancels.get() + 1);
                host.timers.borrow_mut().retain(|(other, _, _)| *other != id);
            }))
        }
    }

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: T| sink.borrow_mut().push(value))
    }

    fn abc() -> Vec<RotationItem> {
        vec![
            RotationItem::new("A", "✅"),
            RotationItem::new("B", "📦"),
            RotationItem::new("C", "💬"),
        ]
    }

    // ========================================================================
    // ScrollTracker
    // ========================================================================

    #[test]
    fn test_scroll_mount_reads_immediately() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        source.0.metrics.set(Some(ScrollMetrics::new(250.0, 500.0, 1000.0)));
        let (seen, on_change) = recorder::<ScrollSnapshot>();

        let mut tracker = ScrollTracker::new(source.clone(), BACK_TO_TOP_THRESHOLD_PX, on_change);
        assert!(tracker.mount());

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(tracker.snapshot().progress, 50.0);
        assert!(!tracker.snapshot().past_threshold);
        assert_eq!(source.active(), 1);
    }

    #[test]
    fn test_scroll_updates_on_events() {
        let source = ManualScrollSource::with_page(500.0, 1500.0);
        let mut tracker = ScrollTracker::new(source.clone(), BACK_TO_TOP_THRESHOLD_PX, |_| {});
        tracker.mount();

        source.scroll_to(250.0);
        assert_eq!(tracker.snapshot().progress, 25.0);
        assert!(!tracker.snapshot().past_threshold);

        source.scroll_to(1000.0);
        assert_eq!(tracker.snapshot().progress, 100.0);
        assert!(tracker.snapshot().past_threshold);

        source.scroll_to(0.0);
        assert_eq!(tracker.snapshot(), ScrollSnapshot::default());
    }

    #[test]
    fn test_scroll_double_mount_is_noop() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        let mut tracker = ScrollTracker::new(source.clone(), 20.0, |_| {});

        assert!(tracker.mount());
        assert!(!tracker.mount());
        assert_eq!(source.subscribes(), 1);
        assert_eq!(source.active(), 1);
    }

    #[test]
    fn test_scroll_double_unmount_is_noop() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        let mut tracker = ScrollTracker::new(source.clone(), 20.0, |_| {});
        tracker.mount();

        assert!(tracker.unmount());
        assert!(!tracker.unmount());
        assert_eq!(source.cancels(), 1);
        assert_eq!(source.active(), 0);
    }

    #[test]
    fn test_scroll_unmount_without_mount() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        let mut tracker = ScrollTracker::new(source.clone(), 20.0, |_| {});
        assert!(!tracker.unmount());
        assert_eq!(source.cancels(), 0);
    }

    #[test]
    fn test_scroll_mount_cycles_leave_no_listeners() {
        let source = ManualScrollSource::with_page(500.0, 2000.0);
        let mut tracker = ScrollTracker::new(source.clone(), 300.0, |_| {});

        for _ in 0..25 {
            assert!(tracker.mount());
            assert_eq!(source.active(), 1);
            assert!(tracker.unmount());
            assert_eq!(source.active(), 0);
        }
        assert_eq!(source.subscribes(), 25);
        assert_eq!(source.cancels(), 25);
    }

    #[test]
    fn test_scroll_drop_cancels() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        {
            let mut tracker = ScrollTracker::new(source.clone(), 20.0, |_| {});
            tracker.mount();
            assert_eq!(source.active(), 1);
        }
        assert_eq!(source.active(), 0);
        assert_eq!(source.cancels(), 1);
    }

    #[test]
    fn test_scroll_callback_after_unmount_ignored() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        let (seen, on_change) = recorder::<ScrollSnapshot>();
        let mut tracker = ScrollTracker::new(source.clone(), 20.0, on_change);
        tracker.mount();

        // Grab the callback as if the host had already queued it
        let queued = Rc::clone(&source.0.listeners.borrow()[0].1);
        tracker.unmount();

        source.0.metrics.set(Some(ScrollMetrics::new(400.0, 500.0, 1000.0)));
        (queued.borrow_mut())();

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(tracker.snapshot(), ScrollSnapshot::default());
    }

    #[test]
    fn test_scroll_snapshot_kept_after_unmount() {
        let source = ManualScrollSource::with_page(500.0, 1000.0);
        let mut tracker = ScrollTracker::new(source.clone(), 20.0, |_| {});
        tracker.mount();
        source.scroll_to(250.0);
        tracker.unmount();

        source.scroll_to(500.0);
        assert_eq!(tracker.snapshot().progress, 50.0);
    }

    #[test]
    fn test_scroll_instances_are_independent() {
        let source = ManualScrollSource::with_page(500.0, 5000.0);
        let mut header = ScrollTracker::new(source.clone(), HEADER_SCROLL_THRESHOLD_PX, |_| {});
        let mut back_to_top = ScrollTracker::new(source.clone(), BACK_TO_TOP_THRESHOLD_PX, |_| {});
        header.mount();
        back_to_top.mount();
        assert_eq!(source.active(), 2);

        source.scroll_to(100.0);
        assert!(header.snapshot().past_threshold);
        assert!(!back_to_top.snapshot().past_threshold);

        header.unmount();
        assert_eq!(source.active(), 1);
        source.scroll_to(400.0);
        assert!(back_to_top.snapshot().past_threshold);
    }

    #[test]
    fn test_scroll_unavailable_source_defaults() {
        let source = ManualScrollSource::unavailable();
        let (seen, on_change) = recorder::<ScrollSnapshot>();
        let mut tracker = ScrollTracker::new(source.clone(), 300.0, on_change);

        assert!(tracker.mount());
        assert!(tracker.is_mounted());
        assert!(!tracker.is_listening());
        assert_eq!(tracker.snapshot(), ScrollSnapshot::default());
        assert_eq!(*seen.borrow(), vec![ScrollSnapshot::default()]);

        assert!(!tracker.mount());
        assert!(tracker.unmount());
        assert_eq!(source.cancels(), 0);
    }

    // ========================================================================
    // Rotator
    // ========================================================================

    #[test]
    fn test_rotator_sequence() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder::<usize>();
        let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, on_change);
        rotator.mount();

        let mut shown = Vec::new();
        for _ in 0..5 {
            shown.push(rotator.current().map(|i| i.text).unwrap_or_default());
            ticker.tick();
        }

        assert_eq!(shown, ["A", "B", "C", "A", "B"]);
        assert_eq!(*seen.borrow(), vec![1, 2, 0, 1, 2]);
        assert_eq!(ticker.periods(), vec![Duration::from_millis(3500)]);
    }

    #[test]
    fn test_rotator_index_matches_item() {
        let ticker = ManualTicker::default();
        let items = hero_phrases();
        let mut rotator = Rotator::new(ticker.clone(), items.clone(), HERO_ROTATION_PERIOD, |_| {});
        rotator.mount();

        for k in 0..14 {
            assert_eq!(rotator.index(), k % items.len());
            assert_eq!(rotator.current().as_ref(), items.get(k % items.len()));
            ticker.tick();
        }
    }

    #[test]
    fn test_rotator_empty_list_starts_no_timer() {
        let ticker = ManualTicker::default();
        let mut rotator = Rotator::new(ticker.clone(), Vec::new(), HERO_ROTATION_PERIOD, |_| {});

        assert!(rotator.mount());
        assert!(rotator.is_mounted());
        assert!(!rotator.is_ticking());
        assert_eq!(ticker.starts(), 0);

        ticker.tick();
        assert_eq!(rotator.index(), 0);
        assert!(rotator.current().is_none());
        assert!(rotator.unmount());
    }

    #[test]
    fn test_rotator_single_item_starts_no_timer() {
        let ticker = ManualTicker::default();
        let mut rotator = Rotator::new(
            ticker.clone(),
            vec![RotationItem::new("Solo", "🎹")],
            HERO_ROTATION_PERIOD,
            |_| {},
        );
        rotator.mount();
        assert_eq!(ticker.starts(), 0);
        assert_eq!(rotator.current().map(|i| i.text), Some("Solo".to_string()));
    }

    #[test]
    fn test_rotator_double_mount_is_noop() {
        let ticker = ManualTicker::default();
        let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, |_| {});

        assert!(rotator.mount());
        assert!(!rotator.mount());
        assert_eq!(ticker.starts(), 1);

        // One timer means one advance per tick
        ticker.tick();
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_rotator_mount_cycles_leave_no_timers() {
        let ticker = ManualTicker::default();
        let mut rotator = Rotator::new(ticker.clone(), abc(), Duration::from_millis(3000), |_| {});

        for _ in 0..10 {
            rotator.mount();
            assert_eq!(ticker.active(), 1);
            rotator.unmount();
            assert_eq!(ticker.active(), 0);
        }
        assert_eq!(ticker.starts(), 10);
        assert_eq!(ticker.cancels(), 10);
        assert!(!rotator.unmount());
    }

    #[test]
    fn test_rotator_stops_after_unmount() {
        let ticker = ManualTicker::default();
        let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, |_| {});
        rotator.mount();
        ticker.tick();
        rotator.unmount();

        ticker.tick();
        ticker.tick();
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_rotator_queued_tick_after_unmount_ignored() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder::<usize>();
        let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, on_change);
        rotator.mount();

        let queued = Rc::clone(&ticker.0.timers.borrow()[0].2);
        rotator.unmount();
        (queued.borrow_mut())();

        assert_eq!(rotator.index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_rotator_restarts_from_first_item_on_remount() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder::<usize>();
        let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, on_change);
        rotator.mount();
        ticker.tick();
        assert_eq!(rotator.index(), 1);
        rotator.unmount();

        rotator.mount();
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current().map(|item| item.text), Some("A".to_string()));
        assert_eq!(*seen.borrow(), vec![1, 0]);

        for k in 1..=4 {
            ticker.tick();
            assert_eq!(rotator.index(), k % 3);
        }
    }

    #[test]
    fn test_rotator_remount_at_first_item_does_not_notify() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder::<usize>();
        let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, on_change);
        rotator.mount();
        rotator.unmount();
        rotator.mount();
        assert_eq!(rotator.index(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_rotator_drop_cancels() {
        let ticker = ManualTicker::default();
        {
            let mut rotator = Rotator::new(ticker.clone(), abc(), HERO_ROTATION_PERIOD, |_| {});
            rotator.mount();
        }
        assert_eq!(ticker.active(), 0);
        assert_eq!(ticker.cancels(), 1);
    }
}
