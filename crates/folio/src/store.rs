// File: folio/src/store.rs
// Purpose: Session-wide content store reconciling backend, snapshot and defaults
//
// The store is the single source of truth for rendering. Reads at startup go
// to the backend; when that fails the last local snapshot is used. Every
// change is written back to the snapshot key so the local copy always mirrors
// memory.

use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::defaults;
use crate::model::{
    Education, Entity, Experience, PersonalInfo, PortfolioState, Project, ResearchProject, Skill,
};
use crate::storage::Storage;

/// Storage key holding the serialized [`PortfolioState`]
pub const SNAPSHOT_KEY: &str = "portfolioData";

/// Where a mutation ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The backend accepted it; its echo is in memory
    Remote,
    /// The backend call failed; the submitted value is in memory only
    LocalOnly,
}

/// Result of a mutation. Mutations always apply locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub source: Source,
}

impl Applied {
    fn remote() -> Self {
        Self {
            source: Source::Remote,
        }
    }

    fn local_only() -> Self {
        Self {
            source: Source::LocalOnly,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source == Source::Remote
    }
}

/// What to do when some of the startup reads fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// One failed read discards every remote result; the whole state comes
    /// from the snapshot (or defaults)
    #[default]
    AllOrNothing,
    /// Each failed read falls back on its own; successful reads are kept
    PerCollection,
}

/// Which source the startup state came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    Snapshot,
    Defaults,
    /// Some collections remote, others local (per-collection policy only)
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    /// Collections whose read failed
    pub failed: Vec<&'static str>,
}

/// Outcomes of the six concurrent startup reads
#[derive(Debug)]
pub struct RemoteLoad {
    pub personal_info: Result<Option<PersonalInfo>, ApiError>,
    pub projects: Result<Vec<Project>, ApiError>,
    pub research_projects: Result<Vec<ResearchProject>, ApiError>,
    pub experience: Result<Vec<Experience>, ApiError>,
    pub education: Result<Vec<Education>, ApiError>,
    pub skills: Result<Vec<Skill>, ApiError>,
}

impl RemoteLoad {
    /// Issue all six reads at once and wait for every one of them
    pub async fn fetch(api: &ApiClient) -> Self {
        let (personal_info, projects, research_projects, experience, education, skills) = tokio::join!(
            api.personal_info(),
            api.list::<Project>(),
            api.list::<ResearchProject>(),
            api.list::<Experience>(),
            api.list::<Education>(),
            api.list::<Skill>(),
        );

        Self {
            personal_info,
            projects,
            research_projects,
            experience,
            education,
            skills,
        }
    }

    pub fn failed(&self) -> Vec<&'static str> {
        let outcomes = [
            ("personalInfo", self.personal_info.is_err()),
            ("projects", self.projects.is_err()),
            ("researchProjects", self.research_projects.is_err()),
            ("experience", self.experience.is_err()),
            ("education", self.education.is_err()),
            ("skills", self.skills.is_err()),
        ];

        outcomes
            .into_iter()
            .filter_map(|(name, failed)| failed.then_some(name))
            .collect()
    }

    /// Full remote state, or `None` if any read failed. Empty answers keep
    /// the compiled-in default for that collection.
    fn into_state(self) -> Option<PortfolioState> {
        Some(PortfolioState {
            personal_info: self
                .personal_info
                .ok()?
                .unwrap_or_else(defaults::personal_info),
            projects: non_empty_or(self.projects.ok()?, defaults::projects),
            research_projects: non_empty_or(self.research_projects.ok()?, defaults::research_projects),
            experience: non_empty_or(self.experience.ok()?, defaults::experience),
            education: non_empty_or(self.education.ok()?, defaults::education),
            skills: non_empty_or(self.skills.ok()?, defaults::skills),
        })
    }
}

/// Snapshot as read back from storage; any field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredSnapshot {
    pub personal_info: Option<PersonalInfo>,
    pub projects: Option<Vec<Project>>,
    pub research_projects: Option<Vec<ResearchProject>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<Skill>>,
}

impl StoredSnapshot {
    /// Missing fields fall back to defaults
    pub fn into_state(self) -> PortfolioState {
        PortfolioState {
            personal_info: self.personal_info.unwrap_or_else(defaults::personal_info),
            projects: self.projects.unwrap_or_else(defaults::projects),
            research_projects: self
                .research_projects
                .unwrap_or_else(defaults::research_projects),
            experience: self.experience.unwrap_or_else(defaults::experience),
            education: self.education.unwrap_or_else(defaults::education),
            skills: self.skills.unwrap_or_else(defaults::skills),
        }
    }
}

fn non_empty_or<T>(items: Vec<T>, default: fn() -> Vec<T>) -> Vec<T> {
    if items.is_empty() {
        default()
    } else {
        items
    }
}

fn remote_or_local<T>(
    remote: Result<Vec<T>, ApiError>,
    local: Option<Vec<T>>,
    default: fn() -> Vec<T>,
) -> Vec<T> {
    match remote {
        Ok(items) => non_empty_or(items, default),
        Err(_) => local.unwrap_or_else(default),
    }
}

impl LoadPolicy {
    /// Combine the startup reads with the local snapshot
    pub fn resolve(
        self,
        remote: RemoteLoad,
        snapshot: Option<StoredSnapshot>,
    ) -> (PortfolioState, LoadSource) {
        let failed = remote.failed().len();
        let local_source = if snapshot.is_some() {
            LoadSource::Snapshot
        } else {
            LoadSource::Defaults
        };

        match self {
            LoadPolicy::AllOrNothing => match remote.into_state() {
                Some(state) => (state, LoadSource::Remote),
                None => (snapshot.unwrap_or_default().into_state(), local_source),
            },
            LoadPolicy::PerCollection => {
                let source = match failed {
                    0 => LoadSource::Remote,
                    6 => local_source,
                    _ => LoadSource::Mixed,
                };
                let snap = snapshot.unwrap_or_default();
                let state = PortfolioState {
                    personal_info: match remote.personal_info {
                        Ok(info) => info.unwrap_or_else(defaults::personal_info),
                        Err(_) => snap.personal_info.unwrap_or_else(defaults::personal_info),
                    },
                    projects: remote_or_local(remote.projects, snap.projects, defaults::projects),
                    research_projects: remote_or_local(
                        remote.research_projects,
                        snap.research_projects,
                        defaults::research_projects,
                    ),
                    experience: remote_or_local(
                        remote.experience,
                        snap.experience,
                        defaults::experience,
                    ),
                    education: remote_or_local(
                        remote.education,
                        snap.education,
                        defaults::education,
                    ),
                    skills: remote_or_local(remote.skills, snap.skills, defaults::skills),
                };
                (state, source)
            }
        }
    }
}

/// Owner of all portfolio content for the lifetime of the process
pub struct PortfolioStore {
    api: ApiClient,
    storage: Arc<dyn Storage>,
    policy: LoadPolicy,
    state: RwLock<PortfolioState>,
}

impl PortfolioStore {
    /// Store seeded with compiled-in defaults
    pub fn new(api: ApiClient, storage: Arc<dyn Storage>) -> Self {
        Self {
            api,
            storage,
            policy: LoadPolicy::default(),
            state: RwLock::new(PortfolioState::default()),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Startup load. Never fails; the outcome is reported and logged.
    pub async fn load(&self) -> LoadReport {
        let remote = RemoteLoad::fetch(&self.api).await;
        let failed = remote.failed();

        let snapshot = if failed.is_empty() {
            None
        } else {
            warn!("Failed to load {:?} from API, using local snapshot", failed);
            self.read_snapshot().await
        };

        let (state, source) = self.policy.resolve(remote, snapshot);
        info!(
            "Portfolio loaded from {:?}: {} projects, {} research, {} skills",
            source,
            state.projects.len(),
            state.research_projects.len(),
            state.skills.len()
        );

        self.commit(|current| *current = state).await;

        LoadReport { source, failed }
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> PortfolioState {
        self.state.read().await.clone()
    }

    /// Borrow the current state for the duration of `f`
    pub async fn read<R>(&self, f: impl FnOnce(&PortfolioState) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    pub async fn update_personal_info(&self, info: PersonalInfo) -> Applied {
        let (info, applied) = match self.api.update_personal_info(&info).await {
            Ok(echoed) => (echoed, Applied::remote()),
            Err(e) => {
                warn!("Failed to update personal info: {}", e);
                (info, Applied::local_only())
            }
        };

        self.commit(|state| state.personal_info = info).await;
        applied
    }

    /// Append a record
    pub async fn add<E: Entity>(&self, item: E) -> Applied {
        let (item, applied) = match self.api.create(&item).await {
            Ok(echoed) => (echoed, Applied::remote()),
            Err(e) => {
                warn!("Failed to create {}: {}", E::LABEL, e);
                (item, Applied::local_only())
            }
        };

        self.commit(|state| E::items_mut(state).push(item)).await;
        applied
    }

    /// Replace the record(s) whose key is `key`
    pub async fn update<E: Entity>(&self, key: &str, item: E) -> Applied {
        let (item, applied) = match self.api.update(key, &item).await {
            Ok(echoed) => (echoed, Applied::remote()),
            Err(e) => {
                warn!("Failed to update {} {}: {}", E::LABEL, key, e);
                (item, Applied::local_only())
            }
        };

        self.commit(|state| {
            for existing in E::items_mut(state).iter_mut().filter(|x| x.key() == key) {
                *existing = item.clone();
            }
        })
        .await;
        applied
    }

    /// Remove the record(s) whose key is `key`
    pub async fn delete<E: Entity>(&self, key: &str) -> Applied {
        let applied = match self.api.delete::<E>(key).await {
            Ok(()) => Applied::remote(),
            Err(e) => {
                warn!("Failed to delete {} {}: {}", E::LABEL, key, e);
                Applied::local_only()
            }
        };

        self.commit(|state| E::items_mut(state).retain(|x| x.key() != key))
            .await;
        applied
    }

    /// Apply a change and rewrite the snapshot while still holding the lock,
    /// so snapshot writes land in the same order as state changes
    async fn commit(&self, change: impl FnOnce(&mut PortfolioState)) {
        let mut state = self.state.write().await;
        change(&mut state);

        let json = match serde_json::to_string(&*state) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize portfolio snapshot: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(SNAPSHOT_KEY, json).await {
            warn!(
                "Failed to write portfolio snapshot to {} storage: {:#}",
                self.storage.name(),
                e
            );
        }
    }

    async fn read_snapshot(&self) -> Option<StoredSnapshot> {
        let raw = match self.storage.get(SNAPSHOT_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read portfolio snapshot: {:#}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Ignoring unreadable portfolio snapshot: {}", e);
                None
            }
        }
    }
}
