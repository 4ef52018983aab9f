// File: folio-server/src/pages.rs
// Purpose: Handlers for the public portfolio pages

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Html;
use axum::Form;
use folio::model::ProjectCategory;
use serde::Deserialize;
use tracing::info;

use crate::views::{self, public};
use crate::{AppError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub category: Option<String>,
}

impl ProjectFilter {
    /// `None` (show everything) for a missing, "all" or unrecognized value
    pub fn category(&self) -> Option<ProjectCategory> {
        let raw = self.category.as_deref()?.trim();
        ProjectCategory::ALL
            .iter()
            .copied()
            .find(|c| raw.eq_ignore_ascii_case(c.wire()) || raw.eq_ignore_ascii_case(c.display()))
    }
}

/// Contact form fields; only acknowledged, never forwarded
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    views::render(state.store.read(public::home).await)
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    views::render(state.store.read(public::about).await)
}

pub async fn projects(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> Html<String> {
    let category = filter.category();
    views::render(
        state
            .store
            .read(|portfolio| public::projects(portfolio, category))
            .await,
    )
}

pub async fn research(State(state): State<AppState>) -> Html<String> {
    views::render(state.store.read(public::research).await)
}

pub async fn contact(State(state): State<AppState>) -> Html<String> {
    views::render(
        state
            .store
            .read(|portfolio| public::contact(portfolio, false))
            .await,
    )
}

pub async fn send_message(
    State(state): State<AppState>,
    Form(message): Form<ContactForm>,
) -> Html<String> {
    info!(
        "Contact message from {} <{}>: {}",
        message.name, message.email, message.subject
    );
    views::render(
        state
            .store
            .read(|portfolio| public::contact(portfolio, true))
            .await,
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route '{}' not found", uri.path()))
}
