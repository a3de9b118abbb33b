//! Reactive wrappers around the scroll tracker and the rotator
//!
//! Each call owns its own tracker. It is mounted by the first client-side
//! effect run and unmounted when the reactive owner is cleaned up. On the
//! server the signals keep their initial values and nothing subscribes.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::rotation::RotationItem;
#[cfg(not(feature = "ssr"))]
use crate::core::rotation::Rotator;
use crate::core::scroll::ScrollSnapshot;
#[cfg(not(feature = "ssr"))]
use crate::core::scroll::ScrollTracker;
#[cfg(not(feature = "ssr"))]
use crate::ui::browser::{IntervalTicker, WindowScrollSource};

/// Read-only scroll state of the window
#[derive(Clone, Copy)]
pub struct ScrollSignals {
    /// Scroll progress in percent, `0.0..=100.0`
    pub progress: Signal<f64>,
    /// Whether `scrollY` is past the threshold given to [`use_scroll_state`]
    pub past_threshold: Signal<bool>,
}

/// Track the window's scroll position for the lifetime of the current owner
pub fn use_scroll_state(threshold_px: f64) -> ScrollSignals {
    let snapshot = RwSignal::new(ScrollSnapshot::default());

    #[cfg(not(feature = "ssr"))]
    {
        let tracker = StoredValue::new_local(ScrollTracker::new(
            WindowScrollSource,
            threshold_px,
            move |next| snapshot.set(next),
        ));

        Effect::new(move |_| {
            tracker.update_value(|tracker| {
                tracker.mount();
            });
        });

        on_cleanup(move || {
            tracker.try_update_value(|tracker| tracker.unmount());
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = threshold_px;
    }

    // Memos so the boolean consumers only rerun when the flag flips
    let progress = Memo::new(move |_| snapshot.with(|s| s.progress));
    let past_threshold = Memo::new(move |_| snapshot.with(|s| s.past_threshold));

    ScrollSignals {
        progress: progress.into(),
        past_threshold: past_threshold.into(),
    }
}

/// Read-only state of a rotating list
#[derive(Clone, Copy)]
pub struct RotationSignals {
    /// Cursor into the item list
    pub index: Signal<usize>,
    /// Item at the cursor, `None` for an empty list
    pub current: Signal<Option<RotationItem>>,
}

/// Cycle through `items` every `period` for the lifetime of the current owner
pub fn use_rotation(items: Vec<RotationItem>, period: Duration) -> RotationSignals {
    let index = RwSignal::new(0usize);

    #[cfg(not(feature = "ssr"))]
    {
        let rotator = StoredValue::new_local(Rotator::new(
            IntervalTicker,
            items.clone(),
            period,
            move |next| index.set(next),
        ));

        Effect::new(move |_| {
            rotator.update_value(|rotator| {
                rotator.mount();
            });
        });

        on_cleanup(move || {
            rotator.try_update_value(|rotator| rotator.unmount());
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = period;
    }

    let items = StoredValue::new(items);
    let current = Memo::new(move |_| items.with_value(|items| items.get(index.get()).cloned()));

    RotationSignals {
        index: index.into(),
        current: current.into(),
    }
}
