// File: folio-server/src/views/mod.rs
// Purpose: Maud templates for the public site and the admin dashboard

pub mod admin;
pub mod layout;
pub mod public;

use axum::response::Html;
use maud::Markup;

/// Convert Maud's Markup into an axum HTML response body
pub fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

/// "start - end", with "Present" for a missing end
pub fn date_range(start: &str, end: Option<&str>) -> String {
    format!("{} - {}", start, end.unwrap_or("Present"))
}
