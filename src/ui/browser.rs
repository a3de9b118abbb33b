//! Browser implementations of the scroll source and ticker
//!
//! Client-only: the server renders with the default scroll snapshot and a
//! stationary rotation.

use std::time::Duration;

use gloo_timers::callback::Interval;
use leptos::logging::warn;
use leptos::web_sys;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::lifecycle::Subscription;
use crate::core::rotation::Ticker;
use crate::core::scroll::{ScrollMetrics, ScrollSource};

/// Window events after which scroll metrics may have changed
const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Scroll metrics of the top-level window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    fn metrics(&self) -> Option<ScrollMetrics> {
        let window = web_sys::window()?;
        let scroll_top = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let document_height = f64::from(window.document()?.document_element()?.scroll_height());
        Some(ScrollMetrics::new(scroll_top, viewport_height, document_height))
    }

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut()>) -> Option<Subscription> {
        let window = web_sys::window()?;
        let handler = Closure::<dyn FnMut()>::new(move || on_scroll());

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);

        for (registered, event) in SCROLL_EVENTS.iter().enumerate() {
            let added = window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                handler.as_ref().unchecked_ref(),
                &options,
            );
            if let Err(err) = added {
                warn!("failed to listen for {event}: {err:?}");
                for event in &SCROLL_EVENTS[..registered] {
                    let _ = window.remove_event_listener_with_callback(
                        event,
                        handler.as_ref().unchecked_ref(),
                    );
                }
                return None;
            }
        }

        Some(Subscription::new(move || {
            for event in SCROLL_EVENTS {
                let _ = window.remove_event_listener_with_callback(
                    event,
                    handler.as_ref().unchecked_ref(),
                );
            }
            drop(handler);
        }))
    }
}

/// Repeating timer backed by `setInterval`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    fn every(&self, period: Duration, mut on_tick: Box<dyn FnMut()>) -> Option<Subscription> {
        let Ok(millis) = u32::try_from(period.as_millis()) else {
            warn!("interval period {period:?} is out of range");
            return None;
        };
        let interval = Interval::new(millis, move || on_tick());
        Some(Subscription::new(move || drop(interval)))
    }
}

/// Smooth-scroll the window back to the top
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
