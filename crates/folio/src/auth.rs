// File: folio/src/auth.rs
// Purpose: Admin authentication state and the route guard decision

use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::storage::Storage;

/// Storage key holding the current admin session token
pub const SESSION_KEY: &str = "isAdminAuthenticated";

/// Authentication state of the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Initial session check has not completed
    Loading,
    Authenticated { session: String },
    Unauthenticated,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

/// What the admin route guard should do with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// State unknown yet; show a neutral placeholder
    Pending,
    Allow,
    Redirect(String),
}

/// Tracks whether the admin is signed in
///
/// State only changes on the initial [`restore`](AuthGate::restore), on
/// [`login`](AuthGate::login) and on [`logout`](AuthGate::logout).
pub struct AuthGate {
    state: watch::Sender<AuthState>,
    login_path: String,
}

impl AuthGate {
    pub fn new(login_path: impl Into<String>) -> Self {
        let (state, _) = watch::channel(AuthState::Loading);
        Self {
            state,
            login_path: login_path.into(),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// One-time initial session check against the persisted session
    pub async fn restore(&self, storage: &dyn Storage) -> AuthState {
        let resolved = match storage.get(SESSION_KEY).await {
            Ok(Some(session)) if !session.trim().is_empty() => AuthState::Authenticated {
                session: session.trim().to_string(),
            },
            Ok(_) => AuthState::Unauthenticated,
            Err(e) => {
                warn!("Failed to read admin session: {:#}", e);
                AuthState::Unauthenticated
            }
        };

        info!("Admin session restored: {}", resolved.is_authenticated());
        self.state.send_replace(resolved.clone());
        resolved
    }

    /// Pass credentials to the backend and open a session on success
    ///
    /// Returns the backend response untouched alongside the new session token.
    pub async fn login(
        &self,
        api: &ApiClient,
        storage: &dyn Storage,
        username: &str,
        password: &str,
    ) -> Result<(String, Value), ApiError> {
        match api.login(username, password).await {
            Ok(response) => {
                let session = uuid::Uuid::new_v4().to_string();
                if let Err(e) = storage.set(SESSION_KEY, session.clone()).await {
                    warn!("Failed to persist admin session: {:#}", e);
                }
                info!("Admin logged in as {}", username);
                self.state.send_replace(AuthState::Authenticated {
                    session: session.clone(),
                });
                Ok((session, response))
            }
            Err(e) => {
                warn!("Admin login rejected: {}", e);
                self.state.send_replace(AuthState::Unauthenticated);
                Err(e)
            }
        }
    }

    /// Close the session; the backend call is best-effort
    pub async fn logout(&self, api: &ApiClient, storage: &dyn Storage) {
        if let Err(e) = api.logout().await {
            warn!("Backend logout failed: {}", e);
        }
        if let Err(e) = storage.delete(SESSION_KEY).await {
            warn!("Failed to clear admin session: {:#}", e);
        }
        info!("Admin logged out");
        self.state.send_replace(AuthState::Unauthenticated);
    }

    /// Decide what a request presenting `session` may see
    pub fn guard(&self, session: Option<&str>) -> Guard {
        match &*self.state.borrow() {
            AuthState::Loading => Guard::Pending,
            AuthState::Authenticated { session: current } if session == Some(current.as_str()) => {
                Guard::Allow
            }
            _ => Guard::Redirect(self.login_path.clone()),
        }
    }
}
