//! Integration tests for the portfolio store
//!
//! The backend is replaced by an in-process fake transport so individual
//! endpoints can be made to fail.

use async_trait::async_trait;
use folio::model::{PersonalInfo, Project, ProjectCategory, Skill, SkillCategory, SkillLevel};
use folio::storage::{MemoryStorage, Storage};
use folio::store::{StoredSnapshot, SNAPSHOT_KEY};
use folio::{
    defaults, ApiClient, ApiError, LoadPolicy, LoadSource, Method, PortfolioState,
    PortfolioStore, Source, Transport,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeBackend {
    reads: Mutex<HashMap<String, Value>>,
    failing: Mutex<HashSet<String>>,
    down: Mutex<bool>,
    /// Id the backend assigns to created records
    assigned_id: Mutex<Option<String>>,
    calls: Mutex<Vec<(Method, String)>>,
}

impl FakeBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn serve(&self, endpoint: &str, value: Value) {
        self.reads.lock().unwrap().insert(endpoint.to_string(), value);
    }

    fn fail(&self, endpoint: &str) {
        self.failing.lock().unwrap().insert(endpoint.to_string());
    }

    fn go_down(&self) {
        *self.down.lock().unwrap() = true;
    }

    fn assign_ids(&self, id: &str) {
        *self.assigned_id.lock().unwrap() = Some(id.to_string());
    }

    fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push((method, endpoint.to_string()));

        if *self.down.lock().unwrap() || self.failing.lock().unwrap().contains(endpoint) {
            return Err(ApiError::Transport {
                endpoint: endpoint.to_string(),
                message: "connection refused".to_string(),
            });
        }

        match method {
            Method::Get => Ok(self
                .reads
                .lock()
                .unwrap()
                .get(endpoint)
                .cloned()
                .unwrap_or(Value::Null)),
            Method::Post => {
                let mut body = body.unwrap_or(Value::Null);
                if let Some(id) = self.assigned_id.lock().unwrap().clone() {
                    body["id"] = json!(id);
                }
                Ok(body)
            }
            Method::Put => Ok(body.unwrap_or(Value::Null)),
            Method::Delete => Ok(Value::Null),
        }
    }
}

fn store_with(backend: &Arc<FakeBackend>, storage: &MemoryStorage) -> PortfolioStore {
    PortfolioStore::new(ApiClient::new(backend.clone()), Arc::new(storage.clone()))
}

fn remote_profile() -> PersonalInfo {
    PersonalInfo {
        name: "Ada Lovelace".to_string(),
        title: "Analyst".to_string(),
        email: "ada@example.com".to_string(),
        ..Default::default()
    }
}

fn remote_project() -> Project {
    Project {
        id: "77".to_string(),
        title: "Analytical Engine Emulator".to_string(),
        description: "Runs Note G".to_string(),
        technologies: vec!["Rust".to_string()],
        category: ProjectCategory::Desktop,
        image_url: None,
        github_url: None,
        live_url: None,
    }
}

fn skill(name: &str, level: SkillLevel, category: SkillCategory) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category,
    }
}

/// Backend answering every startup read with non-empty data
fn populated_backend() -> Arc<FakeBackend> {
    let backend = FakeBackend::new();
    backend.serve("/personal-info", serde_json::to_value(remote_profile()).unwrap());
    backend.serve("/projects", json!([remote_project()]));
    backend.serve(
        "/research-projects",
        json!([{ "id": 5, "title": "Notes", "abstract": "On the engine" }]),
    );
    backend.serve(
        "/experiences",
        json!([{ "id": "e1", "title": "Analyst", "company": "Babbage & Co", "startDate": "1842-10-01" }]),
    );
    backend.serve(
        "/education",
        json!([{ "id": "d1", "degree": "Mathematics", "institution": "Private tutoring", "startDate": "1832-01-01" }]),
    );
    backend.serve(
        "/skills",
        json!([{ "name": "Mathematics", "level": "EXPERT", "category": "OTHER" }]),
    );
    backend
}

async fn stored_snapshot(storage: &MemoryStorage) -> PortfolioState {
    let raw = storage.get(SNAPSHOT_KEY).await.unwrap().expect("snapshot written");
    serde_json::from_str::<StoredSnapshot>(&raw).unwrap().into_state()
}

#[tokio::test]
async fn test_remote_load_replaces_defaults_exactly() {
    let backend = populated_backend();
    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    let report = store.load().await;
    let state = store.snapshot().await;

    assert_eq!(report.source, LoadSource::Remote);
    assert!(report.failed.is_empty());
    assert_eq!(state.personal_info, remote_profile());
    assert_eq!(state.projects, vec![remote_project()]);
    assert_eq!(state.research_projects.len(), 1);
    assert_eq!(state.research_projects[0].id, "5");
    assert_eq!(state.experience[0].start_date, "1842-10");
    assert_eq!(state.education[0].degree, "Mathematics");
    assert_eq!(
        state.skills,
        vec![skill("Mathematics", SkillLevel::Expert, SkillCategory::Other)]
    );

    // Startup also writes the snapshot
    assert_eq!(stored_snapshot(&storage).await, state);
}

#[tokio::test]
async fn test_one_failed_read_uses_snapshot_for_everything() {
    let backend = populated_backend();
    backend.fail("/skills");

    let storage = MemoryStorage::new();
    let mut saved = PortfolioState::default();
    saved.projects.truncate(1);
    saved.personal_info.name = "From Snapshot".to_string();
    storage
        .set(SNAPSHOT_KEY, serde_json::to_string(&saved).unwrap())
        .await
        .unwrap();

    let store = store_with(&backend, &storage);
    let report = store.load().await;

    assert_eq!(report.source, LoadSource::Snapshot);
    assert_eq!(report.failed, vec!["skills"]);
    assert_eq!(store.snapshot().await, saved);
}

#[tokio::test]
async fn test_one_malformed_record_uses_snapshot_for_everything() {
    let backend = populated_backend();
    // Second record has no title
    backend.serve(
        "/projects",
        json!([remote_project(), { "id": 9, "category": "web" }]),
    );

    let storage = MemoryStorage::new();
    let mut saved = PortfolioState::default();
    saved.personal_info.name = "From Snapshot".to_string();
    storage
        .set(SNAPSHOT_KEY, serde_json::to_string(&saved).unwrap())
        .await
        .unwrap();

    let store = store_with(&backend, &storage);
    let report = store.load().await;

    assert_eq!(report.source, LoadSource::Snapshot);
    assert_eq!(report.failed, vec!["projects"]);
    let state = store.snapshot().await;
    assert_eq!(state, saved);
    assert!(!state.projects.contains(&remote_project()));
}

#[tokio::test]
async fn test_one_failed_read_without_snapshot_uses_defaults() {
    let backend = populated_backend();
    backend.fail("/personal-info");

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);
    let report = store.load().await;

    assert_eq!(report.source, LoadSource::Defaults);
    assert_eq!(store.snapshot().await, PortfolioState::default());
}

#[tokio::test]
async fn test_backend_down_and_no_snapshot_gives_defaults() {
    let backend = FakeBackend::new();
    backend.go_down();

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);
    let report = store.load().await;

    assert_eq!(report.failed.len(), 6);
    let state = store.snapshot().await;
    assert_eq!(state.personal_info, defaults::personal_info());
    assert_eq!(state.projects, defaults::projects());
    assert_eq!(state.research_projects, defaults::research_projects());
    assert_eq!(state.experience, defaults::experience());
    assert_eq!(state.education, defaults::education());
    assert_eq!(state.skills, defaults::skills());
}

#[tokio::test]
async fn test_unreadable_snapshot_is_ignored() {
    let backend = FakeBackend::new();
    backend.go_down();

    let storage = MemoryStorage::new();
    storage.set(SNAPSHOT_KEY, "{not json".to_string()).await.unwrap();

    let store = store_with(&backend, &storage);
    let report = store.load().await;

    assert_eq!(report.source, LoadSource::Defaults);
    assert_eq!(store.snapshot().await, PortfolioState::default());
}

#[tokio::test]
async fn test_per_collection_policy_keeps_good_reads() {
    let backend = populated_backend();
    backend.fail("/skills");

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage).with_policy(LoadPolicy::PerCollection);
    let report = store.load().await;
    let state = store.snapshot().await;

    assert_eq!(report.source, LoadSource::Mixed);
    assert_eq!(state.projects, vec![remote_project()]);
    assert_eq!(state.skills, defaults::skills());
}

#[tokio::test]
async fn test_server_echo_wins_on_create() {
    let backend = FakeBackend::new();
    backend.assign_ids("server-9");

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);
    let mut project = remote_project();
    project.id = "1700000000000".to_string();

    let applied = store.add(project).await;
    let state = store.snapshot().await;

    assert_eq!(applied.source, Source::Remote);
    assert_eq!(state.projects.last().unwrap().id, "server-9");
    assert_eq!(stored_snapshot(&storage).await.projects, state.projects);
}

#[tokio::test]
async fn test_failed_create_keeps_local_values() {
    let backend = FakeBackend::new();
    backend.go_down();

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    let applied = store.add(remote_project()).await;
    let state = store.snapshot().await;

    assert_eq!(applied.source, Source::LocalOnly);
    assert_eq!(state.projects.last(), Some(&remote_project()));
    assert_eq!(stored_snapshot(&storage).await.projects, state.projects);
}

#[tokio::test]
async fn test_failed_update_applies_submitted_value() {
    let backend = FakeBackend::new();
    backend.fail("/projects/2");

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    let mut edited = defaults::projects().remove(1);
    edited.title = "Renamed".to_string();

    let applied = store.update("2", edited.clone()).await;

    assert!(!applied.is_remote());
    let state = store.snapshot().await;
    assert_eq!(state.projects[1], edited);
    assert_eq!(state.projects.len(), 3);
}

#[tokio::test]
async fn test_delete_applies_even_when_backend_down() {
    let backend = FakeBackend::new();
    backend.go_down();

    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    let applied = store.delete::<Project>("1").await;

    assert_eq!(applied.source, Source::LocalOnly);
    let ids: Vec<_> = store.snapshot().await.projects.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[tokio::test]
async fn test_delete_skill_by_name_removes_only_that_skill() {
    let backend = FakeBackend::new();
    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    // Same level and category as "Node.js" and "Express.js"
    let before = store.snapshot().await.skills;
    let applied = store.delete::<Skill>("Express.js").await;
    let after = store.snapshot().await.skills;

    assert!(applied.is_remote());
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|s| s.name != "Express.js"));
    assert!(after.iter().any(|s| s.name == "Node.js"));
    assert_eq!(
        backend.calls(),
        vec![(Method::Delete, "/skills/name/Express.js".to_string())]
    );
    assert_eq!(stored_snapshot(&storage).await.skills, after);
}

#[tokio::test]
async fn test_skill_rename_is_keyed_by_old_name() {
    let backend = FakeBackend::new();
    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    let renamed = skill("Rust", SkillLevel::Advanced, SkillCategory::Programming);
    store.update("Java", renamed.clone()).await;

    let skills = store.snapshot().await.skills;
    assert!(skills.iter().all(|s| s.name != "Java"));
    assert_eq!(skills.iter().filter(|s| **s == renamed).count(), 1);
    assert_eq!(backend.calls()[0].1, "/skills/name/Java");
}

#[tokio::test]
async fn test_personal_info_update_reports_source() {
    let backend = FakeBackend::new();
    let storage = MemoryStorage::new();
    let store = store_with(&backend, &storage);

    let applied = store.update_personal_info(remote_profile()).await;
    assert_eq!(applied.source, Source::Remote);
    assert_eq!(store.snapshot().await.personal_info, remote_profile());

    backend.go_down();
    let mut offline = remote_profile();
    offline.bio = "Written offline".to_string();

    let applied = store.update_personal_info(offline.clone()).await;
    assert_eq!(applied.source, Source::LocalOnly);
    assert_eq!(stored_snapshot(&storage).await.personal_info, offline);
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let backend = FakeBackend::new();
    let storage = MemoryStorage::new();

    {
        let store = store_with(&backend, &storage);
        store.add(remote_project()).await;
    }

    backend.go_down();
    let store = store_with(&backend, &storage);
    store.load().await;

    assert_eq!(store.snapshot().await.projects.last(), Some(&remote_project()));
}
