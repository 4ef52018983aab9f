//! HTTP transport against a local mock backend

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use folio::model::{Project, ProjectCategory, Skill};
use folio::{ApiClient, ApiError, HttpTransport, Method, Transport};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/api/projects",
            get(|| async {
                Json(json!([
                    { "id": 1, "title": "Site", "category": "WEB", "technologies": ["Rust"] },
                    { "id": "2", "title": "App", "category": "mobile" }
                ]))
            }),
        )
        .route("/api/personal-info", get(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/api/skills",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/skills/name/:name",
            put(|Json(body): Json<Value>| async move { Json(body) }),
        )
        .route(
            "/api/echo",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let accept = headers
                    .get(header::ACCEPT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "accept": accept, "body": body }))
            }),
        )
        .route("/api/broken", get(|| async { "<html>oops</html>" }))
        .route(
            "/api/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([]))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_list_decodes_lenient_records() {
    let client = ApiClient::http(spawn_backend().await);

    let projects = client.list::<Project>().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "1");
    assert_eq!(projects[0].category, ProjectCategory::Web);
    assert_eq!(projects[1].category, ProjectCategory::Mobile);
    assert!(projects[1].technologies.is_empty());
}

#[tokio::test]
async fn test_empty_body_is_null() {
    let base = spawn_backend().await;
    let transport = HttpTransport::new(base.clone());

    let value = transport.send(Method::Get, "/personal-info", None).await.unwrap();
    assert_eq!(value, Value::Null);

    let client = ApiClient::http(base);
    assert!(client.personal_info().await.unwrap().is_none());
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let client = ApiClient::http(spawn_backend().await);

    let err = client.list::<Skill>().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500 (/skills)");
}

#[tokio::test]
async fn test_json_headers_and_body_are_sent() {
    let transport = HttpTransport::new(spawn_backend().await);

    let value = transport
        .send(Method::Post, "/echo", Some(json!({ "title": "x" })))
        .await
        .unwrap();

    assert_eq!(value["accept"], "application/json");
    assert_eq!(value["body"], json!({ "title": "x" }));
}

#[tokio::test]
async fn test_skill_update_round_trips_through_name_path() {
    let client = ApiClient::http(spawn_backend().await);
    let skill = folio::defaults::skills().remove(3);

    let echoed = client.update::<Skill>(&skill.name, &skill).await.unwrap();

    assert_eq!(echoed, skill);
}

#[tokio::test]
async fn test_unparsable_body_is_decode_error() {
    let transport = HttpTransport::new(spawn_backend().await);

    let err = transport.send(Method::Get, "/broken", None).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(Arc::new(HttpTransport::new(format!("http://{}/api", addr))));
    let err = client.list::<Project>().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let transport =
        HttpTransport::with_timeout(spawn_backend().await, Duration::from_millis(100)).unwrap();

    let err = transport.send(Method::Get, "/slow", None).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
}
