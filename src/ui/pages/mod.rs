//! Application pages module
//!
//! - Landing page (home)
//! - Blog index
//! - Blog post
//! - Not found

mod blog;
mod blog_post;
mod landing;
mod not_found;

pub use blog::BlogIndexPage;
pub use blog_post::BlogPostPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
