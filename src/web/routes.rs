use axum::extract::{RawQuery, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use url::form_urlencoded;

use super::pages;
use super::AppState;
use crate::controller::{load_feed, load_post};

/// Create the router with all page routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feed))
        .route("/index.html", get(feed))
        .route("/post.html", get(post_detail))
        .route("/healthz", get(health))
}

// ========== HTML Routes ==========

async fn feed(State(state): State<AppState>) -> Response {
    let view = load_feed(state.source.as_ref()).await;
    Html(pages::render_feed_page(&view).into_string()).into_response()
}

/// First `id` pair of the query string; later duplicates are ignored.
fn query_id(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
}

async fn post_detail(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let id = query_id(query.as_deref());
    let view = load_post(state.source.as_ref(), id.as_deref()).await;
    Html(pages::render_post_page(&view).into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}
