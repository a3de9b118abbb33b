//! Framework-independent state, content and lifecycle types

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod lifecycle;
pub mod rotation;
pub mod scroll;
pub mod site;
#[cfg(test)]
mod tests;

pub use content::{ContentError, Post, PostMeta};
pub use lifecycle::Subscription;
pub use rotation::{RotatingContent, RotationItem, Rotator, Ticker};
pub use scroll::{ScrollMetrics, ScrollSnapshot, ScrollSource, ScrollState, ScrollTracker};
