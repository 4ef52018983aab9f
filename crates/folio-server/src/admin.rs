// File: folio-server/src/admin.rs
// Purpose: Admin login, logout and dashboard mutation handlers

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio::form::{
    EducationForm, ExperienceForm, PersonalInfoForm, ProjectForm, ResearchForm, SkillForm,
};
use folio::model::{Education, Experience, Project, ResearchProject, Skill};
use folio::{Guard, Source};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

use crate::session::{expired_cookie, session_cookie, session_token};
use crate::views::{self, admin as view};
use crate::{AppError, AppState};

/// Query value asking the dashboard to show the local-only notice
pub const LOCAL_ONLY: &str = "local-only";

pub const LOCAL_ONLY_NOTICE: &str =
    "Saved locally only: the server could not be reached, so this change is not stored remotely.";

/// Query value for a save the backend accepted
pub const SAVED: &str = "saved";

pub const SAVED_NOTICE: &str = "Changes saved!";

/// Dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Personal,
    Projects,
    Research,
    Experience,
    Education,
    Skills,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Personal,
        Tab::Projects,
        Tab::Research,
        Tab::Experience,
        Tab::Education,
        Tab::Skills,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Personal => "personal",
            Tab::Projects => "projects",
            Tab::Research => "research",
            Tab::Experience => "experience",
            Tab::Education => "education",
            Tab::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Personal => "Personal Info",
            Tab::Projects => "Projects",
            Tab::Research => "Research",
            Tab::Experience => "Experience",
            Tab::Education => "Education",
            Tab::Skills => "Skills",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.slug() == slug)
    }

    /// Dashboard URL showing this tab
    pub fn href(self) -> String {
        format!("/admin?tab={}", self.slug())
    }
}

/// Which record, if any, the dashboard editor is open on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Editing {
    Closed,
    New,
    Existing(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub edit: Option<String>,
    pub new: Option<String>,
    pub notice: Option<String>,
}

impl DashboardQuery {
    /// Unknown tabs show personal info
    pub fn tab(&self) -> Tab {
        self.tab
            .as_deref()
            .and_then(Tab::from_slug)
            .unwrap_or(Tab::Personal)
    }

    pub fn editing(&self) -> Editing {
        match (&self.edit, &self.new) {
            (Some(key), _) => Editing::Existing(key.clone()),
            (None, Some(_)) => Editing::New,
            (None, None) => Editing::Closed,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self.notice.as_deref() {
            Some(LOCAL_ONLY) => Some(LOCAL_ONLY_NOTICE),
            Some(SAVED) => Some(SAVED_NOTICE),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = session_token(&headers, &state.session_cookie);
    if state.auth.guard(token.as_deref()) == Guard::Allow {
        return Redirect::to("/admin").into_response();
    }
    views::render(view::login(None)).into_response()
}

pub async fn login(State(state): State<AppState>, Form(credentials): Form<LoginForm>) -> Response {
    let result = state
        .auth
        .login(
            state.store.api(),
            state.store.storage().as_ref(),
            &credentials.username,
            &credentials.password,
        )
        .await;

    match result {
        Ok((token, _)) => {
            let mut response = Redirect::to("/admin").into_response();
            if let Some(cookie) = session_cookie(&state.session_cookie, &token) {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            response
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            views::render(view::login(Some("Invalid username or password"))),
        )
            .into_response(),
    }
}

pub async fn logout(State(state): State<AppState>) -> Response {
    state
        .auth
        .logout(state.store.api(), state.store.storage().as_ref())
        .await;

    let mut response = Redirect::to(state.auth.login_path()).into_response();
    if let Some(cookie) = expired_cookie(&state.session_cookie) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let tab = query.tab();
    let editing = query.editing();
    let notice = query.notice();

    views::render(
        state
            .store
            .read(|portfolio| view::dashboard(portfolio, tab, &editing, notice))
            .await,
    )
}

pub async fn save_personal(
    State(state): State<AppState>,
    Form(form): Form<PersonalInfoForm>,
) -> Result<Redirect, AppError> {
    let info = form.into_info();
    require(&info.name, "Name")?;

    let applied = state.store.update_personal_info(info).await;

    let notice = match applied.source {
        Source::Remote => SAVED,
        Source::LocalOnly => LOCAL_ONLY,
    };
    Ok(Redirect::to(&format!("{}&notice={}", Tab::Personal.href(), notice)))
}

pub async fn create(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let tab = collection_tab(&collection)?;
    let store = &state.store;

    match tab {
        Tab::Projects => {
            store.add(project(parse_form(fields)?)?).await;
        }
        Tab::Research => {
            store.add(research(parse_form(fields)?)?).await;
        }
        Tab::Experience => {
            store.add(experience(parse_form(fields)?)?).await;
        }
        Tab::Education => {
            store.add(education(parse_form(fields)?)?).await;
        }
        Tab::Skills => {
            store.add(skill(parse_form(fields)?)?).await;
        }
        Tab::Personal => return Err(unknown_collection(&collection)),
    }

    Ok(Redirect::to(&tab.href()))
}

pub async fn update(
    State(state): State<AppState>,
    Path((collection, key)): Path<(String, String)>,
    Form(mut fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let tab = collection_tab(&collection)?;
    let store = &state.store;

    // Records addressed by id keep it even if the form omits it
    if tab != Tab::Skills {
        let id = fields.entry("id".to_string()).or_default();
        if id.trim().is_empty() {
            *id = key.clone();
        }
    }

    match tab {
        Tab::Projects => {
            store.update(&key, project(parse_form(fields)?)?).await;
        }
        Tab::Research => {
            store.update(&key, research(parse_form(fields)?)?).await;
        }
        Tab::Experience => {
            store.update(&key, experience(parse_form(fields)?)?).await;
        }
        Tab::Education => {
            store.update(&key, education(parse_form(fields)?)?).await;
        }
        Tab::Skills => {
            store.update(&key, skill(parse_form(fields)?)?).await;
        }
        Tab::Personal => return Err(unknown_collection(&collection)),
    }

    Ok(Redirect::to(&tab.href()))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((collection, key)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let tab = collection_tab(&collection)?;
    let store = &state.store;

    match tab {
        Tab::Projects => store.delete::<Project>(&key).await,
        Tab::Research => store.delete::<ResearchProject>(&key).await,
        Tab::Experience => store.delete::<Experience>(&key).await,
        Tab::Education => store.delete::<Education>(&key).await,
        Tab::Skills => store.delete::<Skill>(&key).await,
        Tab::Personal => return Err(unknown_collection(&collection)),
    };

    Ok(Redirect::to(&tab.href()))
}

fn collection_tab(slug: &str) -> Result<Tab, AppError> {
    Tab::from_slug(slug).ok_or_else(|| unknown_collection(slug))
}

fn unknown_collection(slug: &str) -> AppError {
    AppError::not_found(format!("Unknown collection '{}'", slug))
}

/// Decode string form fields into one of the typed edit forms
fn parse_form<T: DeserializeOwned>(fields: HashMap<String, String>) -> Result<T, AppError> {
    let value = serde_json::to_value(fields)?;
    Ok(serde_json::from_value(value)?)
}

fn require(value: &str, label: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{} is required", label)));
    }
    Ok(())
}

fn project(form: ProjectForm) -> Result<Project, AppError> {
    let project = form.into_project();
    require(&project.title, "Title")?;
    Ok(project)
}

fn research(form: ResearchForm) -> Result<ResearchProject, AppError> {
    let research = form.into_research();
    require(&research.title, "Title")?;
    Ok(research)
}

fn experience(form: ExperienceForm) -> Result<Experience, AppError> {
    let experience = form.into_experience();
    require(&experience.title, "Title")?;
    require(&experience.company, "Company")?;
    Ok(experience)
}

fn education(form: EducationForm) -> Result<Education, AppError> {
    let education = form.into_education();
    require(&education.degree, "Degree")?;
    require(&education.institution, "Institution")?;
    Ok(education)
}

fn skill(form: SkillForm) -> Result<Skill, AppError> {
    let skill = form.into_skill();
    require(&skill.name, "Name")?;
    Ok(skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tab_slugs_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(Tab::from_slug("settings"), None);
    }

    #[test]
    fn test_dashboard_query_defaults() {
        let query = DashboardQuery::default();
        assert_eq!(query.tab(), Tab::Personal);
        assert_eq!(query.editing(), Editing::Closed);
        assert_eq!(query.notice(), None);
    }

    #[test]
    fn test_dashboard_query_editing() {
        let query = DashboardQuery {
            tab: Some("skills".to_string()),
            edit: Some("C++".to_string()),
            new: Some("1".to_string()),
            notice: Some(LOCAL_ONLY.to_string()),
        };
        assert_eq!(query.tab(), Tab::Skills);
        assert_eq!(query.editing(), Editing::Existing("C++".to_string()));
        assert_eq!(query.notice(), Some(LOCAL_ONLY_NOTICE));
    }

    #[test]
    fn test_dashboard_query_notices() {
        let notice = |value: &str| DashboardQuery {
            notice: Some(value.to_string()),
            ..DashboardQuery::default()
        };
        assert_eq!(notice(SAVED).notice(), Some(SAVED_NOTICE));
        assert_eq!(notice(LOCAL_ONLY).notice(), Some(LOCAL_ONLY_NOTICE));
        assert_eq!(notice("bogus").notice(), None);
    }

    #[test]
    fn test_parse_form_normalizes_lists() {
        let fields = HashMap::from([
            ("title".to_string(), "Site".to_string()),
            ("technologies".to_string(), "React, Node.js,  Node.js ".to_string()),
            ("category".to_string(), "web".to_string()),
        ]);

        let project = project(parse_form(fields).unwrap()).unwrap();

        assert_eq!(project.technologies, vec!["React", "Node.js", "Node.js"]);
        assert!(!project.id.is_empty());
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let err = skill(SkillForm::default()).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
