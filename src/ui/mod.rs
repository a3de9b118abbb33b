#[cfg(not(feature = "ssr"))]
pub mod browser;
pub mod chrome;
pub mod common;
pub mod hooks;
pub mod icon;
pub mod markdown;
pub mod pages;
pub mod seo;
pub mod theme;

pub use icon::{Icon, icons};
pub use markdown::Markdown;
