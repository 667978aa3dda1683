//! # Schema Builder
//!
//! Host for the JSON schema builder editor.
//!
//! - The editor itself is the `schema-builder-ui` Leptos crate, built with
//!   Trunk into `ui/dist` and embedded into this binary.
//! - The field tree, its copy-on-write edits and the schema projection live
//!   in `schema-builder-core`.
//! - This crate serves the editor and offers a headless `generate` command.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod generate;

use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router.
///
/// `/health` reports liveness; every other path is served from the embedded
/// UI bundle.
pub fn create_app(health_handler: Arc<HealthHandler>) -> Router {
    Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .fallback(UIHandler::serve)
        .layer(TraceLayer::new_for_http())
}
