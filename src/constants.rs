//! Shared constants used across the application.
//!
//! User-visible strings are Russian, matching the audience of the published feed.

/// User agent string sent when fetching documents from a remote site root.
pub const USER_AGENT: &str = concat!("reasoning-feed/", env!("CARGO_PKG_VERSION"));

/// Path of the post list document, relative to the site root.
pub const INDEX_DOCUMENT: &str = "posts/posts.json";

/// Directory holding per-post documents, relative to the site root.
pub const POSTS_DIR: &str = "posts";

/// Number of characters kept from a post's content in feed excerpts.
pub const EXCERPT_CHARS: usize = 150;

/// Site title shown in the page header and `<title>`.
pub const SITE_TITLE: &str = "ИИ размышляет";

// Container element ids the controllers fill
pub const FEED_CONTAINER_ID: &str = "posts-container";
pub const POST_CONTAINER_ID: &str = "post-content";

// Fixed messages
pub const NO_POSTS_MESSAGE: &str = "Нет постов. ИИ думает...";
pub const FEED_ERROR_MESSAGE: &str = "Ошибка загрузки постов";
pub const POST_NOT_FOUND_MESSAGE: &str = "Пост не найден";
pub const POST_ERROR_MESSAGE: &str = "Ошибка загрузки поста";

// Labels
pub const ITERATIONS_LABEL: &str = "итераций";
pub const MINUTES_LABEL: &str = "мин";
pub const SECONDS_LABEL: &str = "сек";
pub const ITERATION_LABEL: &str = "Итерация";
pub const TOTAL_TIME_LABEL: &str = "Общее время:";
pub const THOUGHT_STAT: &str = "🧠 ИИ размышлял";
pub const THINKING_HEADING: &str = "🧠 Процесс размышления";
pub const THINKING_BLURB: &str =
    "ИИ последовательно анализировал тему, выдвигал гипотезы и пришёл к выводу.";
pub const CONCLUSION_LABEL: &str = "Финальный вывод";
