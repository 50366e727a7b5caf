mod pages;
mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Config, DocumentLocation};
use crate::constants::POSTS_DIR;
use crate::source::DocumentSource;

pub use pages::{render_feed_page, render_post_page};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DocumentSource>,
    pub config: Arc<Config>,
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails to bind or stops unexpectedly.
pub async fn serve<F>(config: Config, source: Arc<dyn DocumentSource>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState {
        source,
        config: Arc::new(config),
    };

    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
///
/// Raw post documents are served under `/posts` only when they come from a
/// local directory; a remote site root serves them itself.
pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    info!(static_dir = %static_dir.display(), "Serving static files");

    let mut router = Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir));

    if let Some(posts_dir) = local_posts_dir(&state.config) {
        info!(posts_dir = %posts_dir.display(), "Serving raw post documents");
        router = router.nest_service("/posts", ServeDir::new(posts_dir));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn local_posts_dir(config: &Config) -> Option<PathBuf> {
    match &config.documents {
        DocumentLocation::Local(root) => Some(root.join(POSTS_DIR)),
        DocumentLocation::Remote(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_local_posts_dir() {
        let config = Config::for_testing("/srv/site");
        assert_eq!(
            local_posts_dir(&config),
            Some(PathBuf::from("/srv/site/posts"))
        );

        let mut config = Config::for_testing("/srv/site");
        config.documents =
            DocumentLocation::Remote(Url::parse("https://example.com/").unwrap());
        assert_eq!(local_posts_dir(&config), None);
    }
}
