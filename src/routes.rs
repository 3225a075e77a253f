//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the Leptos shell, serves
//! the hydrate bundle under `/pkg`, and answers `/healthz`. Feedback writes go
//! from the browser straight to the document store.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR routes plus static assets and the health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = pkg_dir(Path::new(leptos_options.site_root.as_ref()), &leptos_options.site_pkg_dir);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Directory holding the compiled WASM, JS and CSS bundle.
fn pkg_dir(site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root.join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
