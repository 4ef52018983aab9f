// File: folio-server/src/session.rs
// Purpose: Session cookie handling and the admin route guard

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use folio::Guard;

use crate::{views, AppState};

/// `name=value` pairs across every `Cookie` header, in request order
fn cookie_pairs(headers: &HeaderMap) -> impl Iterator<Item = (&str, &str)> {
    headers
        .get_all(header::COOKIE)
        .into_iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|line| line.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim(), value.trim()))
}

/// Session token presented by the request, if any
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    cookie_pairs(headers)
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// `Set-Cookie` value opening a session
pub fn session_cookie(cookie_name: &str, token: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        cookie_name, token
    ))
    .ok()
}

/// `Set-Cookie` value removing the session
pub fn expired_cookie(cookie_name: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        cookie_name
    ))
    .ok()
}

/// Middleware in front of every admin route
pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let token = session_token(request.headers(), &state.session_cookie);

    match state.auth.guard(token.as_deref()) {
        Guard::Allow => next.run(request).await,
        Guard::Pending => views::render(views::layout::pending()).into_response(),
        Guard::Redirect(to) => Redirect::to(&to).into_response(),
    }
}
