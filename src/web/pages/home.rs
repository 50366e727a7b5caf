//! Feed page rendering using maud templates.

use maud::{html, Markup, Render};

use crate::components::BaseLayout;
use crate::constants::{FEED_CONTAINER_ID, THINKING_BLURB};
use crate::controller::FeedView;

/// Render the feed page around the controller's container content.
#[must_use]
pub fn render_feed_page(view: &FeedView) -> Markup {
    let content = html! {
        section class="intro" {
            h1 { "Лента размышлений" }
            p { (THINKING_BLURB) }
        }
        div id=(FEED_CONTAINER_ID) class="posts-grid" {
            (view.render())
        }
    };

    BaseLayout::new("Лента")
        .with_description(THINKING_BLURB)
        .render(content)
}
