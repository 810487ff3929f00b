//! HTTP request handlers.
//!
//! Each handler is a pure computation over its own input plus the static
//! policy table — no shared mutable state, nothing to lock.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use xsslab_core::level;

use crate::render;

#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    /// Missing parameter means empty string, never an error.
    #[serde(default)]
    pub comment: String,
}

/// `GET /` — static welcome page.
pub async fn home() -> Html<String> {
    Html(render::render_shell(render::HOME_BODY))
}

/// `GET /:level?comment=...` — the three lab pages.
///
/// An unknown level key is a 404, never a 500: the resolver guard is the
/// only fallible step here.
pub async fn level_page(
    Path(key): Path<String>,
    Query(q): Query<CommentQuery>,
) -> Result<Html<String>, StatusCode> {
    let policy = level::resolve(&key).map_err(|err| {
        tracing::debug!(%err, "level lookup failed");
        StatusCode::NOT_FOUND
    })?;

    tracing::debug!(level = %key, comment_len = q.comment.len(), "rendering level page");

    let body = render::render_level_body(policy, &q.comment);
    Ok(Html(render::render_shell(&body)))
}
