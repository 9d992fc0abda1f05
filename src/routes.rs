//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The demo page and its stylesheet are served as static files at `/`; the
//! compiled `client` WASM bundle is served at `/pkg`. Nothing is rendered
//! server-side: the theme is resolved entirely in the browser.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

pub fn app(config: &Config) -> Router {
    let site = ServeDir::new(&config.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
