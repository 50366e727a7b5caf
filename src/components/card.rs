//! Card components for the post feed.
//!
//! This module provides maud components for rendering post summary cards
//! and the list that holds them.

use maud::{html, Markup, Render};
use urlencoding::encode;

use crate::constants::{ITERATIONS_LABEL, MINUTES_LABEL, THOUGHT_STAT};
use crate::posts::{display_quantity, excerpt, format_date, PostSummary};

/// A summary card linking to a post's detail page.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&summary);
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a PostSummary,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(post: &'a PostSummary) -> Self {
        Self { post }
    }

    /// Relative link to the detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("post.html?id={}", encode(&self.post.id))
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        html! {
            a href=(self.href()) class="post-card" {
                div class="post-header" {
                    h2 class="post-title" { (post.title) }
                    div class="post-meta" {
                        span { "📅 " (format_date(&post.date)) }
                        span { "⚡ " (display_quantity(post.iterations)) " " (ITERATIONS_LABEL) }
                    }
                }
                div class="post-content" {
                    p class="post-excerpt" { (excerpt(&post.content)) }
                    div class="post-stats" {
                        span class="post-stat" {
                            "⏱️ " (display_quantity(post.duration)) " " (MINUTES_LABEL)
                        }
                        span class="post-stat" { (THOUGHT_STAT) }
                    }
                }
            }
        }
    }
}

/// The concatenated cards of a feed, in the order given.
///
/// Rendering an empty slice yields empty markup; callers decide whether
/// to show a placeholder instead.
#[derive(Debug, Clone)]
pub struct PostFeed<'a> {
    pub posts: &'a [PostSummary],
}

impl<'a> PostFeed<'a> {
    /// Create a new feed.
    #[must_use]
    pub const fn new(posts: &'a [PostSummary]) -> Self {
        Self { posts }
    }
}

impl Render for PostFeed<'_> {
    fn render(&self) -> Markup {
        html! {
            @for post in self.posts {
                (PostCard::new(post))
            }
        }
    }
}
