//! Common reusable UI components
//!
//! Page-level effects shared by every route (scroll progress, back-to-top,
//! quick actions) and small building blocks used by the pages.

pub mod back_to_top;
pub mod floating_action;
pub mod reveal;
pub mod rotating_text;
pub mod scroll_progress;
pub mod skeleton;

pub use back_to_top::BackToTop;
pub use floating_action::FloatingAction;
pub use reveal::RevealScript;
pub use rotating_text::RotatingText;
pub use scroll_progress::ScrollProgress;
pub use skeleton::{Skeleton, SkeletonAnimation, SkeletonVariant};
