// File: folio-server/src/lib.rs
// Purpose: Router, shared state and startup wiring for the portfolio site

pub mod admin;
pub mod error;
pub mod pages;
pub mod session;
pub mod views;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::{middleware, Router};
use folio::storage::create_storage;
use folio::{ApiClient, AuthGate, Config, HttpTransport, PortfolioStore};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PortfolioStore>,
    pub auth: Arc<AuthGate>,
    /// Name of the cookie carrying the admin session token
    pub session_cookie: String,
}

impl AppState {
    pub fn new(store: PortfolioStore, auth: AuthGate, session_cookie: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            auth: Arc::new(auth),
            session_cookie: session_cookie.into(),
        }
    }

    /// Build everything from configuration, load content and restore the
    /// admin session
    pub async fn from_config(config: &Config) -> Result<Self> {
        let storage_config = config.storage.to_storage_config()?;
        let storage = create_storage(&storage_config)
            .await
            .context("Failed to open fallback storage")?;
        info!("Fallback storage: {}", storage.name());

        let transport = match config.api.timeout() {
            Some(timeout) => HttpTransport::with_timeout(&config.api.base_url, timeout)
                .context("Failed to build HTTP client")?,
            None => HttpTransport::new(&config.api.base_url),
        };
        info!("Backend: {}", transport.base_url());

        let store = PortfolioStore::new(ApiClient::new(Arc::new(transport)), storage)
            .with_policy(config.sync.load_policy()?);
        store.load().await;

        let auth = AuthGate::new(&config.admin.login_path);
        auth.restore(store.storage().as_ref()).await;

        Ok(Self::new(store, auth, &config.admin.session_cookie))
    }
}

/// The complete site: public pages, login and the guarded dashboard
pub fn app(state: AppState) -> Router {
    let login_path = state.auth.login_path().to_string();

    let guarded = Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/admin/logout", post(admin::logout))
        .route("/admin/personal", post(admin::save_personal))
        .route("/admin/:collection", post(admin::create))
        .route("/admin/:collection/:key", post(admin::update))
        .route("/admin/:collection/:key/delete", post(admin::delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_admin,
        ));

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/research", get(pages::research))
        .route("/contact", get(pages::contact).post(pages::send_message))
        .route(&login_path, get(admin::login_page).post(admin::login))
        .merge(guarded)
        .fallback(pages::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
