//! HTML shell handlers
//!
//! Both pages are static shells; the listings inside them are populated
//! client-side from the JSON endpoints.

use axum::response::Html;

/// Public site: browse approved items and submit claims
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// Internal staff panel: review items and resolve claims
pub async fn internal_dashboard() -> Html<&'static str> {
    Html(include_str!("../../templates/internal_dashboard.html"))
}
