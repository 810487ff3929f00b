//! Axum router wiring.
//!
//! `/:level` makes the core resolver the single source of truth for which
//! level pages exist: unknown keys 404 through `resolve`, unmatched paths
//! 404 through axum, and non-GET methods on matched paths get axum's 405.

use axum::{routing::get, Router};

use crate::pages;

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/:level", get(pages::level_page))
}
