//! Base layout components for the web UI.
//!
//! This module provides the page skeleton shared by the feed and the post
//! pages: head, site header and footer.

use maud::{html, Markup, DOCTYPE};

use crate::constants::SITE_TITLE;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    description: Option<&'a str>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
        }
    }

    /// Set the meta description.
    #[must_use]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="ru" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @if let Some(description) = self.description {
                        meta name="description" content=(description);
                    }
                    title { (self.title) " - " (SITE_TITLE) }
                    link rel="stylesheet" href="static/css/style.css";
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🧠</text></svg>";
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    /// Render the page header.
    fn render_header() -> Markup {
        html! {
            header class="container" {
                a href="index.html" class="site-logo" { strong { (SITE_TITLE) } }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small { "Посты сгенерированы локальной языковой моделью" }
            }
        }
    }
}
