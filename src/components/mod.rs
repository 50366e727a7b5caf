//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout
//! - `alert`: Fixed container messages (empty feed, load errors, not found)
//! - `card`: Post summary cards and the feed list
//! - `post`: Post detail view with the thinking timeline

pub mod alert;
pub mod card;
pub mod layout;
pub mod post;

pub use alert::{Message, MessageVariant};
pub use card::{PostCard, PostFeed};
pub use layout::BaseLayout;
pub use post::{with_line_breaks, ConclusionBlock, IterationBlock, PostArticle};
