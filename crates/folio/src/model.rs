// File: folio/src/model.rs
// Purpose: Portfolio content types and the application state that holds them

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::wire::{month_from_backend, month_to_backend, wire_enum};

wire_enum! {
    /// Kind of software project
    ProjectCategory, fallback = Other, {
        Web => ("WEB", "web"),
        Mobile => ("MOBILE", "mobile"),
        Desktop => ("DESKTOP", "desktop"),
        Other => ("OTHER", "other"),
    }
}

wire_enum! {
    /// Self-assessed proficiency
    SkillLevel, fallback = Beginner, {
        Beginner => ("BEGINNER", "Beginner"),
        Intermediate => ("INTERMEDIATE", "Intermediate"),
        Advanced => ("ADVANCED", "Advanced"),
        Expert => ("EXPERT", "Expert"),
    }
}

wire_enum! {
    /// Grouping used on the skills section
    SkillCategory, fallback = Other, {
        Programming => ("PROGRAMMING", "Programming"),
        Framework => ("FRAMEWORK", "Framework"),
        Tool => ("TOOL", "Tool"),
        Database => ("DATABASE", "Database"),
        Other => ("OTHER", "Other"),
    }
}

/// Order in which skill groups are shown
pub const SKILL_GROUP_ORDER: [SkillCategory; 5] = [
    SkillCategory::Programming,
    SkillCategory::Framework,
    SkillCategory::Database,
    SkillCategory::Tool,
    SkillCategory::Other,
];

/// Singleton profile shown across the public pages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchProject {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    /// `None` means the position is current
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_courses: Option<Vec<String>>,
}

/// Skills have no id; the name is the identity key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

/// All portfolio content held by one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioState {
    pub personal_info: PersonalInfo,
    pub projects: Vec<Project>,
    pub research_projects: Vec<ResearchProject>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self {
            personal_info: crate::defaults::personal_info(),
            projects: crate::defaults::projects(),
            research_projects: crate::defaults::research_projects(),
            experience: crate::defaults::experience(),
            education: crate::defaults::education(),
            skills: crate::defaults::skills(),
        }
    }
}

impl PortfolioState {
    /// Skills of one category, in stored order
    pub fn skills_in(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.category == category).collect()
    }

    /// Projects of one category; `None` means all
    pub fn projects_in(&self, category: Option<ProjectCategory>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    /// The first three projects, shown on the home page
    pub fn featured_projects(&self) -> &[Project] {
        let end = self.projects.len().min(3);
        &self.projects[..end]
    }
}

/// A keyed collection inside [`PortfolioState`] with its own REST resource
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection endpoint, e.g. `/projects`
    const COLLECTION: &'static str;

    /// Human name used in logs
    const LABEL: &'static str;

    /// Identity key (id, or name for skills)
    fn key(&self) -> &str;

    /// Endpoint addressing one record by its identity key
    fn member_path(key: &str) -> String {
        format!("{}/{}", Self::COLLECTION, urlencoding::encode(key))
    }

    fn items(state: &PortfolioState) -> &Vec<Self>;

    fn items_mut(state: &mut PortfolioState) -> &mut Vec<Self>;

    /// Adjust a record before it is sent to the backend
    fn into_wire(self) -> Self {
        self
    }

    /// Adjust a record received from the backend
    fn from_wire(self) -> Self {
        self
    }
}

impl Entity for Project {
    const COLLECTION: &'static str = "/projects";
    const LABEL: &'static str = "project";

    fn key(&self) -> &str {
        &self.id
    }

    fn items(state: &PortfolioState) -> &Vec<Self> {
        &state.projects
    }

    fn items_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.projects
    }
}

impl Entity for ResearchProject {
    const COLLECTION: &'static str = "/research-projects";
    const LABEL: &'static str = "research project";

    fn key(&self) -> &str {
        &self.id
    }

    fn items(state: &PortfolioState) -> &Vec<Self> {
        &state.research_projects
    }

    fn items_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.research_projects
    }
}

impl Entity for Experience {
    const COLLECTION: &'static str = "/experiences";
    const LABEL: &'static str = "experience";

    fn key(&self) -> &str {
        &self.id
    }

    fn items(state: &PortfolioState) -> &Vec<Self> {
        &state.experience
    }

    fn items_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.experience
    }

    fn into_wire(mut self) -> Self {
        self.start_date = month_to_backend(&self.start_date);
        self.end_date = self.end_date.map(|d| month_to_backend(&d));
        self
    }

    fn from_wire(mut self) -> Self {
        self.start_date = month_from_backend(&self.start_date);
        self.end_date = self.end_date.map(|d| month_from_backend(&d));
        self
    }
}

impl Entity for Education {
    const COLLECTION: &'static str = "/education";
    const LABEL: &'static str = "education";

    fn key(&self) -> &str {
        &self.id
    }

    fn items(state: &PortfolioState) -> &Vec<Self> {
        &state.education
    }

    fn items_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.education
    }

    fn into_wire(mut self) -> Self {
        self.start_date = month_to_backend(&self.start_date);
        self.end_date = self.end_date.map(|d| month_to_backend(&d));
        self
    }

    fn from_wire(mut self) -> Self {
        self.start_date = month_from_backend(&self.start_date);
        self.end_date = self.end_date.map(|d| month_from_backend(&d));
        self
    }
}

impl Entity for Skill {
    const COLLECTION: &'static str = "/skills";
    const LABEL: &'static str = "skill";

    fn key(&self) -> &str {
        &self.name
    }

    fn member_path(key: &str) -> String {
        format!("{}/name/{}", Self::COLLECTION, urlencoding::encode(key))
    }

    fn items(state: &PortfolioState) -> &Vec<Self> {
        &state.skills
    }

    fn items_mut(state: &mut PortfolioState) -> &mut Vec<Self> {
        &mut state.skills
    }
}

/// Accepts ids sent as strings or as JSON numbers
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
