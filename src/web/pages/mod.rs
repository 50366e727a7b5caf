//! Maud-based page templates for the web UI.
//!
//! Each page wraps a controller's container content in the base layout.

pub mod home;
pub mod post;

pub use home::render_feed_page;
pub use post::render_post_page;
