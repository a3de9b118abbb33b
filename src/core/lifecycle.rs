//! Subscription handles for event listeners and timers
//!
//! Every listener or timer a component registers is represented by a
//! [`Subscription`]. Cancelling it (explicitly or by dropping it) deregisters
//! the callback exactly once. Trackers pair the subscription with a
//! [`Liveness`] flag that their callbacks check, so a callback the host has
//! already queued cannot touch state after unmount.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Handle to a registered listener or timer.
///
/// The cancel closure runs at most once: on the first call to
/// [`Subscription::cancel`] or when the handle is dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the closure that deregisters the callback
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Deregister the callback.
    ///
    /// Returns `true` if this call performed the cancellation, `false` if the
    /// subscription was already cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(cancel) => {
                cancel();
                true
            }
            None => false,
        }
    }

    /// Whether the callback is still registered
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Shared flag telling callbacks whether their owner is still mounted
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub(crate) fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    fn kill(&self) {
        self.0.set(false);
    }
}

/// State held by a tracker while it is mounted.
///
/// `subscription` is `None` when the host could not register a callback
/// (no window during server rendering, for instance). The tracker is still
/// considered mounted so a second `mount` stays a no-op.
#[derive(Debug)]
pub(crate) struct Mounted {
    liveness: Liveness,
    subscription: Option<Subscription>,
}

impl Mounted {
    pub(crate) fn new(liveness: Liveness, subscription: Option<Subscription>) -> Self {
        Self {
            liveness,
            subscription,
        }
    }

    pub(crate) fn has_subscription(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.liveness.kill();
        if let Some(subscription) = self.subscription.as_mut() {
            subscription.cancel();
        }
    }
}
