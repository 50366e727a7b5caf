//! Page controllers.
//!
//! Each controller performs one fetch, parses the document and decides what
//! the page's container shows. Failures never escape: they are logged and
//! collapse into the page's fixed message.

use maud::{Markup, Render};
use thiserror::Error;
use tracing::{debug, error};

use crate::components::{Message, PostArticle, PostFeed};
use crate::posts::{PostDetail, PostSummary, ValidationError};
use crate::source::{Document, DocumentSource, SourceError};

/// Why a document could not be turned into a view.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Fetch and parse the post list.
///
/// # Errors
///
/// Returns an error if the document cannot be fetched or is not a list of posts.
pub async fn fetch_index(source: &dyn DocumentSource) -> Result<Vec<PostSummary>, DocumentError> {
    let bytes = source.fetch(Document::Index).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Fetch, parse and validate one post.
///
/// # Errors
///
/// Returns an error if the document cannot be fetched, does not parse, or
/// has no thoughts.
pub async fn fetch_post(source: &dyn DocumentSource, id: &str) -> Result<PostDetail, DocumentError> {
    let bytes = source.fetch(Document::Post(id)).await?;
    let post: PostDetail = serde_json::from_slice(&bytes)?;
    post.validate()?;
    Ok(post)
}

/// What the feed container shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    Posts(Vec<PostSummary>),
    Empty,
    Failed,
}

impl Render for FeedView {
    fn render(&self) -> Markup {
        match self {
            Self::Posts(posts) => PostFeed::new(posts).render(),
            Self::Empty => Message::no_posts().render(),
            Self::Failed => Message::feed_error().render(),
        }
    }
}

/// What the post container shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PostView {
    Post(Box<PostDetail>),
    NotFound,
    Failed,
}

impl PostView {
    /// The post's title once loaded.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Post(post) => Some(&post.title),
            Self::NotFound | Self::Failed => None,
        }
    }
}

impl Render for PostView {
    fn render(&self) -> Markup {
        match self {
            Self::Post(post) => PostArticle::new(post).render(),
            Self::NotFound => Message::post_not_found().render(),
            Self::Failed => Message::post_error().render(),
        }
    }
}

/// Load the feed: list of posts, placeholder, or error message.
pub async fn load_feed(source: &dyn DocumentSource) -> FeedView {
    match fetch_index(source).await {
        Ok(posts) if posts.is_empty() => FeedView::Empty,
        Ok(posts) => {
            debug!(count = posts.len(), "Loaded post list");
            FeedView::Posts(posts)
        }
        Err(e) => {
            error!(source = %source.describe(), "Failed to load posts: {e}");
            FeedView::Failed
        }
    }
}

/// Load a post by the page's `id` query parameter.
///
/// A missing or empty id is answered without touching the source.
pub async fn load_post(source: &dyn DocumentSource, id: Option<&str>) -> PostView {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return PostView::NotFound;
    };

    match fetch_post(source, id).await {
        Ok(post) => {
            debug!(id = %id, thoughts = post.thoughts.len(), "Loaded post");
            PostView::Post(Box::new(post))
        }
        Err(e) => {
            error!(id = %id, source = %source.describe(), "Failed to load post: {e}");
            PostView::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    /// In-memory source that counts fetches.
    #[derive(Default)]
    struct FakeSource {
        documents: HashMap<String, String>,
        fetches: AtomicUsize,
    }

    impl FakeSource {
        fn with(mut self, path: &str, body: &str) -> Self {
            self.documents.insert(path.to_string(), body.to_string());
            self
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentSource for FakeSource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        async fn fetch(&self, document: Document<'_>) -> Result<Vec<u8>, SourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let path = document.relative_path();
            self.documents
                .get(&path)
                .map(|body| body.clone().into_bytes())
                .ok_or(SourceError::NotFound { path: path.into() })
        }
    }

    const POST: &str = r#"{
        "id": "p1",
        "title": "Первый",
        "date": "2025-01-15T10:00:00",
        "thoughts": [
            {"text": "a", "timestamp": "2025-01-15T10:00:00"},
            {"text": "b", "timestamp": "2025-01-15T10:00:30"}
        ]
    }"#;

    #[tokio::test]
    async fn test_load_feed_posts() {
        let source = FakeSource::default().with(
            "posts/posts.json",
            r#"[{"id": "p1", "title": "Первый", "date": "2025-01-15T10:00:00", "content": "x"}]"#,
        );
        let view = load_feed(&source).await;

        match &view {
            FeedView::Posts(posts) => assert_eq!(posts[0].id, "p1"),
            other => panic!("unexpected view: {other:?}"),
        }
        assert!(view.render().into_string().contains("post-card"));
        assert_eq!(source.fetches(), 1);
    }

    #[tokio::test]
    async fn test_load_feed_empty() {
        let source = FakeSource::default().with("posts/posts.json", "[]");
        let view = load_feed(&source).await;

        assert_eq!(view, FeedView::Empty);
        assert!(view.render().into_string().contains("Нет постов. ИИ думает..."));
    }

    #[tokio::test]
    async fn test_load_feed_missing_and_malformed() {
        assert_eq!(load_feed(&FakeSource::default()).await, FeedView::Failed);

        let source = FakeSource::default().with("posts/posts.json", "<html>404</html>");
        assert_eq!(load_feed(&source).await, FeedView::Failed);

        let source = FakeSource::default().with("posts/posts.json", r#"{"posts": []}"#);
        assert_eq!(load_feed(&source).await, FeedView::Failed);
    }

    #[tokio::test]
    async fn test_load_post_without_id_skips_fetch() {
        let source = FakeSource::default().with("posts/p1.json", POST);

        assert_eq!(load_post(&source, None).await, PostView::NotFound);
        assert_eq!(load_post(&source, Some("")).await, PostView::NotFound);
        assert_eq!(source.fetches(), 0);
        assert_eq!(
            PostView::NotFound.render().into_string(),
            "<p>Пост не найден</p>"
        );
    }

    #[tokio::test]
    async fn test_load_post_found() {
        let source = FakeSource::default().with("posts/p1.json", POST);
        let view = load_post(&source, Some("p1")).await;

        assert_eq!(view.title(), Some("Первый"));
        let html = view.render().into_string();
        assert!(html.contains("Итерация 2"));
        assert!(html.contains("⏱️ 30 сек"));
        assert!(html.contains("<strong>b</strong>"));
    }

    #[tokio::test]
    async fn test_load_post_failures() {
        let source = FakeSource::default()
            .with("posts/bad.json", "not json")
            .with(
                "posts/empty.json",
                r#"{"id": "empty", "title": "t", "date": "2025-01-15T10:00:00", "thoughts": []}"#,
            );

        assert_eq!(load_post(&source, Some("missing")).await, PostView::Failed);
        assert_eq!(load_post(&source, Some("bad")).await, PostView::Failed);
        assert_eq!(load_post(&source, Some("empty")).await, PostView::Failed);
        assert_eq!(
            PostView::Failed.render().into_string(),
            "<p>Ошибка загрузки поста</p>"
        );
    }

    #[tokio::test]
    async fn test_fetch_post_reports_empty_thoughts() {
        let source = FakeSource::default().with(
            "posts/empty.json",
            r#"{"id": "empty", "title": "t", "date": "2025-01-15T10:00:00", "thoughts": []}"#,
        );
        let err = fetch_post(&source, "empty").await.unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Invalid(ValidationError::EmptyThoughts { .. })
        ));
    }
}
