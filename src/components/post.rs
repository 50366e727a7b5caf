//! Post detail components: metadata line, thinking timeline and conclusion.

use maud::{html, Markup, Render};

use crate::constants::{
    CONCLUSION_LABEL, ITERATIONS_LABEL, ITERATION_LABEL, MINUTES_LABEL, SECONDS_LABEL,
    THINKING_BLURB, THINKING_HEADING, TOTAL_TIME_LABEL,
};
use crate::posts::{display_quantity, format_date_time, timeline, Iteration, PostDetail};

/// Render text with each newline turned into a `<br>`.
///
/// The text itself is escaped; only the line breaks are markup.
#[must_use]
pub fn with_line_breaks(text: &str) -> Markup {
    html! {
        @for (i, line) in text.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

/// One iteration block of the timeline.
#[derive(Debug, Clone)]
pub struct IterationBlock<'a> {
    pub iteration: Iteration<'a>,
}

impl Render for IterationBlock<'_> {
    fn render(&self) -> Markup {
        let it = &self.iteration;
        html! {
            div class="iteration" {
                div class="iteration-header" {
                    div class="iteration-number" { (ITERATION_LABEL) " " (it.number) }
                    div class="iteration-time" { "⏱️ " (it.duration) " " (SECONDS_LABEL) }
                }
                div class="iteration-content" {
                    (with_line_breaks(it.text))
                }
            }
        }
    }
}

/// The closing block with the post's conclusion.
#[derive(Debug, Clone, Copy)]
pub struct ConclusionBlock<'a> {
    pub text: &'a str,
}

impl Render for ConclusionBlock<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="iteration" {
                div class="iteration-header" {
                    div class="iteration-number" { (CONCLUSION_LABEL) }
                }
                div class="iteration-content" {
                    strong { (with_line_breaks(self.text)) }
                }
            }
        }
    }
}

/// The full detail view of a post.
///
/// Expects a validated post; with no thoughts the conclusion block is
/// simply left out.
#[derive(Debug, Clone)]
pub struct PostArticle<'a> {
    pub post: &'a PostDetail,
}

impl<'a> PostArticle<'a> {
    #[must_use]
    pub const fn new(post: &'a PostDetail) -> Self {
        Self { post }
    }
}

impl Render for PostArticle<'_> {
    fn render(&self) -> Markup {
        let post = self.post;

        html! {
            h1 { (post.title) }
            div class="post-full-meta" {
                span { "📅 " (format_date_time(&post.date)) }
                span { "⚡ " (post.thoughts.len()) " " (ITERATIONS_LABEL) }
                span {
                    "⏱️ " (TOTAL_TIME_LABEL) " "
                    (display_quantity(post.total_duration)) " " (MINUTES_LABEL)
                }
            }

            div class="thinking-process" {
                h3 { (THINKING_HEADING) }
                p { (THINKING_BLURB) }
            }

            @for iteration in timeline(&post.thoughts) {
                (IterationBlock { iteration })
            }

            @if let Some(text) = post.conclusion_text() {
                (ConclusionBlock { text })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::{Thought, Timestamp};

    fn thought(text: &str, timestamp: &str, duration: Option<f64>) -> Thought {
        Thought {
            text: text.to_string(),
            timestamp: Timestamp::parse(timestamp).unwrap(),
            duration,
        }
    }

    fn sample_post() -> PostDetail {
        PostDetail {
            id: "2025-01-15-time".to_string(),
            title: "Что такое время?".to_string(),
            date: Timestamp::parse("2025-01-15T14:30:05").unwrap(),
            thoughts: vec![
                thought("Начнём с определения.", "2025-01-15T14:30:00", None),
                thought("Время -\nэто изменение.", "2025-01-15T14:30:30", None),
                thought("Или иллюзия.", "2025-01-15T14:31:15", None),
            ],
            conclusion: None,
            total_duration: Some(6.0),
        }
    }

    #[test]
    fn test_with_line_breaks() {
        assert_eq!(with_line_breaks("a\nb\n\nc").into_string(), "a<br>b<br><br>c");
        assert_eq!(with_line_breaks("<i>").into_string(), "&lt;i&gt;");
    }

    #[test]
    fn test_post_article_header() {
        let post = sample_post();
        let html = PostArticle::new(&post).render().into_string();

        assert!(html.starts_with("<h1>Что такое время?</h1>"));
        assert!(html.contains("<span>📅 15 января 2025 г. в 14:30</span>"));
        assert!(html.contains("<span>⚡ 3 итераций</span>"));
        assert!(html.contains("<span>⏱️ Общее время: 6 мин</span>"));
        assert!(html.contains("<h3>🧠 Процесс размышления</h3>"));
    }

    #[test]
    fn test_post_article_timeline() {
        let post = sample_post();
        let html = PostArticle::new(&post).render().into_string();

        assert!(html.contains(r#"<div class="iteration-number">Итерация 1</div><div class="iteration-time">⏱️ 0 сек</div>"#));
        assert!(html.contains(r#"<div class="iteration-number">Итерация 2</div><div class="iteration-time">⏱️ 30 сек</div>"#));
        assert!(html.contains(r#"<div class="iteration-number">Итерация 3</div><div class="iteration-time">⏱️ 45 сек</div>"#));
        assert!(html.contains("Время -<br>это изменение."));
    }

    #[test]
    fn test_post_article_conclusion_fallback() {
        let post = sample_post();
        let html = PostArticle::new(&post).render().into_string();

        assert!(html.contains(r#"<div class="iteration-number">Финальный вывод</div>"#));
        assert!(html.contains("<strong>Или иллюзия.</strong>"));
    }

    #[test]
    fn test_post_article_explicit_conclusion() {
        let mut post = sample_post();
        post.conclusion = Some("Время\nотносительно.".to_string());
        let html = PostArticle::new(&post).render().into_string();

        assert!(html.contains("<strong>Время<br>относительно.</strong>"));
    }

    #[test]
    fn test_post_article_total_duration_absent() {
        let mut post = sample_post();
        post.total_duration = None;
        let html = PostArticle::new(&post).render().into_string();

        assert!(html.contains("Общее время: 0 мин"));
    }
}
