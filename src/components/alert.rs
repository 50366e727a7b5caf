//! Fixed container messages.
//!
//! Every controller outcome that is not a rendered post ends up as one of
//! these short paragraphs.

use maud::{html, Markup, Render};

use crate::constants::{
    FEED_ERROR_MESSAGE, NO_POSTS_MESSAGE, POST_ERROR_MESSAGE, POST_NOT_FOUND_MESSAGE,
};

/// Message variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    /// Nothing to show yet.
    Empty,
    /// Loading failed.
    Error,
    /// No styling hook.
    Plain,
}

impl MessageVariant {
    /// Get the CSS class for the paragraph, if any.
    #[must_use]
    pub const fn class(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some("no-posts"),
            Self::Error => Some("error"),
            Self::Plain => None,
        }
    }
}

/// A single-paragraph message that replaces a container's content.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Message;
///
/// let markup = Message::feed_error().render();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Message<'a> {
    pub variant: MessageVariant,
    pub text: &'a str,
}

impl<'a> Message<'a> {
    #[must_use]
    pub const fn new(variant: MessageVariant, text: &'a str) -> Self {
        Self { variant, text }
    }

    /// The feed has no posts yet.
    #[must_use]
    pub const fn no_posts() -> Self {
        Self::new(MessageVariant::Empty, NO_POSTS_MESSAGE)
    }

    /// The post list could not be loaded.
    #[must_use]
    pub const fn feed_error() -> Self {
        Self::new(MessageVariant::Error, FEED_ERROR_MESSAGE)
    }

    /// The detail page was opened without a post id.
    #[must_use]
    pub const fn post_not_found() -> Self {
        Self::new(MessageVariant::Plain, POST_NOT_FOUND_MESSAGE)
    }

    /// The post document could not be loaded.
    #[must_use]
    pub const fn post_error() -> Self {
        Self::new(MessageVariant::Plain, POST_ERROR_MESSAGE)
    }
}

impl Render for Message<'_> {
    fn render(&self) -> Markup {
        html! {
            p class=[self.variant.class()] { (self.text) }
        }
    }
}
