//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the health probe, the static asset trees and the
//! Leptos SSR shell. Every GET that no other route claims is rendered by the
//! client's router, which owns the not-found page.

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

use crate::config::{ConfigError, ServerConfig};

/// Build the full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section and no `LEPTOS_*` env).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(&site_root, &config.assets_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Health probe and static file services.
pub(crate) fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/sounds", ServeDir::new(assets_dir.join("sounds")))
        .nest_service("/images", ServeDir::new(assets_dir.join("images")))
}

pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}
