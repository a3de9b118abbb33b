//! Header and footer shared by every page

pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;
