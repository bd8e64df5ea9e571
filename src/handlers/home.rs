//! Form page handler

use axum::response::Html;

/// Serve the static submission form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
