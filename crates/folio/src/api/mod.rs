// File: folio/src/api/mod.rs
// Purpose: Typed client for the portfolio REST backend

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::model::{Entity, PersonalInfo};

pub mod http;

pub use http::HttpTransport;

/// Failure of a single backend call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The backend answered with a non-success status
    #[error("HTTP error! status: {status} ({endpoint})")]
    Status { endpoint: String, status: u16 },

    /// The body could not be read as the expected shape
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Status code for HTTP failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP verbs the backend surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One request/response exchange with the backend
///
/// Implementations make exactly one attempt. An empty response body is
/// returned as `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError>;
}

/// Typed CRUD surface over a [`Transport`]
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client speaking HTTP to `base_url`
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::new(base_url)))
    }

    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let result = self.transport.send(method, endpoint, body).await;
        if let Err(ref e) = result {
            tracing::error!("API request failed: {} {}: {}", method.as_str(), endpoint, e);
        }
        result
    }

    /// `None` when the backend has no personal info yet (`null` or `{}`)
    pub async fn personal_info(&self) -> Result<Option<PersonalInfo>, ApiError> {
        let value = self.request(Method::Get, "/personal-info", None).await?;
        if is_empty_record(&value) {
            return Ok(None);
        }
        decode("/personal-info", value).map(Some)
    }

    pub async fn update_personal_info(&self, info: &PersonalInfo) -> Result<PersonalInfo, ApiError> {
        let body = encode("/personal-info", info)?;
        let value = self.request(Method::Put, "/personal-info", Some(body)).await?;
        decode("/personal-info", value)
    }

    /// Every record of a collection. A non-array answer counts as empty.
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, ApiError> {
        let value = self.request(Method::Get, E::COLLECTION, None).await?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| decode::<E>(E::COLLECTION, item).map(E::from_wire))
                .collect(),
            _ => Ok(Vec::new()),
        }
    }

    pub async fn create<E: Entity>(&self, item: &E) -> Result<E, ApiError> {
        let body = encode(E::COLLECTION, &item.clone().into_wire())?;
        let value = self.request(Method::Post, E::COLLECTION, Some(body)).await?;
        decode::<E>(E::COLLECTION, value).map(E::from_wire)
    }

    /// Update addressed by identity key (name for skills)
    pub async fn update<E: Entity>(&self, key: &str, item: &E) -> Result<E, ApiError> {
        self.put(&E::member_path(key), item).await
    }

    /// Update addressed by numeric/opaque id, bypassing name addressing
    pub async fn update_by_id<E: Entity>(&self, id: &str, item: &E) -> Result<E, ApiError> {
        self.put(&by_id_path::<E>(id), item).await
    }

    pub async fn delete<E: Entity>(&self, key: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, &E::member_path(key), None)
            .await
            .map(|_| ())
    }

    pub async fn delete_by_id<E: Entity>(&self, id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, &by_id_path::<E>(id), None)
            .await
            .map(|_| ())
    }

    /// Credentials are passed through; the response is returned untouched
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, ApiError> {
        let body = json!({ "username": username, "password": password });
        self.request(Method::Post, "/auth/login", Some(body)).await
    }

    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.request(Method::Post, "/auth/logout", None).await
    }

    async fn put<E: Entity>(&self, endpoint: &str, item: &E) -> Result<E, ApiError> {
        let body = encode(endpoint, &item.clone().into_wire())?;
        let value = self.request(Method::Put, endpoint, Some(body)).await?;
        decode::<E>(endpoint, value).map(E::from_wire)
    }
}

fn by_id_path<E: Entity>(id: &str) -> String {
    format!("{}/{}", E::COLLECTION, urlencoding::encode(id))
}

fn is_empty_record(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn encode<T: Serialize>(endpoint: &str, item: &T) -> Result<Value, ApiError> {
    serde_json::to_value(item).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Project, Skill};
    use std::sync::Mutex;

    /// Records every call and answers with a fixed value
    struct Recorder {
        calls: Mutex<Vec<(Method, String, Option<Value>)>>,
        reply: Value,
    }

    impl Recorder {
        fn new(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply,
            })
        }
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(
            &self,
            method: Method,
            endpoint: &str,
            body: Option<Value>,
        ) -> Result<Value, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push((method, endpoint.to_string(), body));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_non_array_collection_is_empty() {
        let client = ApiClient::new(Recorder::new(json!({ "message": "nope" })));
        let projects = client.list::<Project>().await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_empty_personal_info_is_none() {
        let client = ApiClient::new(Recorder::new(json!({})));
        assert!(client.personal_info().await.unwrap().is_none());

        let client = ApiClient::new(Recorder::new(Value::Null));
        assert!(client.personal_info().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_skill_update_uses_name_path() {
        let recorder = Recorder::new(json!({
            "name": "C++",
            "level": "EXPERT",
            "category": "PROGRAMMING"
        }));
        let client = ApiClient::new(recorder.clone());
        let skill = crate::defaults::skills()
            .into_iter()
            .find(|s| s.name == "C++")
            .unwrap();

        let echoed = client.update::<Skill>("C++", &skill).await.unwrap();

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls[0].0, Method::Put);
        assert_eq!(calls[0].1, "/skills/name/C%2B%2B");
        assert_eq!(calls[0].2.as_ref().unwrap()["level"], "INTERMEDIATE");
        assert_eq!(echoed.level, crate::model::SkillLevel::Expert);
    }

    #[tokio::test]
    async fn test_delete_by_id_uses_plain_collection_path() {
        let recorder = Recorder::new(Value::Null);
        let client = ApiClient::new(recorder.clone());

        client.delete_by_id::<Skill>("12").await.unwrap();

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls[0].0, Method::Delete);
        assert_eq!(calls[0].1, "/skills/12");
    }

    #[tokio::test]
    async fn test_login_passes_credentials_through() {
        let recorder = Recorder::new(json!({ "token": "abc" }));
        let client = ApiClient::new(recorder.clone());

        let response = client.login("admin", "hunter2").await.unwrap();

        assert_eq!(response["token"], "abc");
        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls[0].1, "/auth/login");
        assert_eq!(
            calls[0].2,
            Some(json!({ "username": "admin", "password": "hunter2" }))
        );
    }

    #[tokio::test]
    async fn test_malformed_record_is_decode_error() {
        let client = ApiClient::new(Recorder::new(json!([{ "nope": true }])));
        let err = client.list::<Project>().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.status(), None);
    }
}
