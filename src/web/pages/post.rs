//! Post detail page rendering using maud templates.

use maud::{html, Markup, Render};

use crate::components::BaseLayout;
use crate::constants::POST_CONTAINER_ID;
use crate::controller::PostView;

/// Render the detail page around the controller's container content.
///
/// The page title follows the post once it is loaded.
#[must_use]
pub fn render_post_page(view: &PostView) -> Markup {
    let title = view.title().unwrap_or("Пост");

    let content = html! {
        a href="index.html" class="back-link" { "← Все посты" }
        article id=(POST_CONTAINER_ID) class="post-full" {
            (view.render())
        }
    };

    BaseLayout::new(title).render(content)
}
