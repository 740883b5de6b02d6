//! Web server module for gamesite.
//!
//! Builds the `axum` router, maps the page routes to the template
//! renderer, and runs the listener. In debug mode the router is wrapped in
//! a live-reload layer so browsers refresh when the server restarts.

use anyhow::Context as _;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use minijinja::context;
use std::net::SocketAddr;
use tower_livereload::LiveReloadLayer;

use crate::{config::CONFIG, templates};

/// Handler failure mapped to an HTTP 500.
///
/// In debug mode the body carries the full error chain, mirroring a
/// development traceback page; otherwise the body stays terse.
pub(crate) struct AppError(anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request handler failed");
        let body = if CONFIG.debug {
            format!("{:?}", self.0)
        } else {
            "internal server error".to_string()
        };
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Build the application router.
///
/// `GET /` and `GET|POST /index` serve the index page; everything else
/// falls through to the framework defaults (404/405).
pub fn router() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/index", get(index_page).post(index_page))
}

/// Start the web server on the configured address
pub async fn run() -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", CONFIG.host, CONFIG.port))?;

    let mut app = router();
    if CONFIG.debug {
        app = app.layer(LiveReloadLayer::new());
    }

    tracing::info!(%addr, debug = CONFIG.debug, "🌐 gamesite serving");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}

/// Display the index page
async fn index_page() -> Result<Html<String>, AppError> {
    let page = templates::render("index.html", context! { title => "Home" })?;
    Ok(Html(page))
}
