// File: folio/src/lib.rs
// Purpose: Main entry point for the folio library

//! # folio
//!
//! Content model and offline-tolerant sync layer for a personal portfolio
//! site.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::{ApiClient, PortfolioStore, storage::MemoryStorage, model::Project};
//! use std::sync::Arc;
//!
//! // 1. Point the client at the backend
//! let api = ApiClient::http("http://localhost:8080/api");
//!
//! // 2. Load content (backend first, local snapshot as fallback)
//! let store = PortfolioStore::new(api, Arc::new(MemoryStorage::new()));
//! store.load().await;
//!
//! // 3. Mutate; the change always applies locally
//! let applied = store.delete::<Project>("3").await;
//! println!("persisted remotely: {}", applied.is_remote());
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod defaults;
pub mod form;
pub mod model;
pub mod storage;
pub mod store;
mod wire;

pub use api::{ApiClient, ApiError, HttpTransport, Method, Transport};
pub use auth::{AuthGate, AuthState, Guard};
pub use config::Config;
pub use model::{Entity, PortfolioState};
pub use store::{Applied, LoadPolicy, LoadReport, LoadSource, PortfolioStore, Source};
pub use wire::{month_from_backend, month_to_backend};
