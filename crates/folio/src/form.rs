// File: folio/src/form.rs
// Purpose: Edit-form payloads and their normalization into content records
//
// Multi-value fields are typed as delimited text in the admin forms. They are
// split, trimmed and stripped of empty entries here, so the store only ever
// sees normalized sequences.

use serde::{Deserialize, Serialize};

use crate::model::{
    Education, Experience, PersonalInfo, Project, ProjectCategory, ResearchProject, Skill,
    SkillCategory, SkillLevel,
};

/// Split a comma-separated list. Order and duplicates are kept.
pub fn split_list(input: &str) -> Vec<String> {
    split_on(input, ',')
}

/// Split a newline-separated bullet list.
pub fn split_lines(input: &str) -> Vec<String> {
    split_on(input, '\n')
}

fn split_on(input: &str, delimiter: char) -> Vec<String> {
    input
        .split(delimiter)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank input means "not set"
pub fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A list that is absent when it has no entries
fn optional_list(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Id for a record created in the dashboard. The backend may assign its own.
pub fn new_record_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

fn id_or_new(id: &str) -> String {
    optional(id).unwrap_or_else(new_record_id)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoForm {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub bio: String,
    pub profile_image_url: String,
}

impl PersonalInfoForm {
    pub fn into_info(self) -> PersonalInfo {
        PersonalInfo {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            linkedin: self.linkedin.trim().to_string(),
            github: self.github.trim().to_string(),
            website: self.website.trim().to_string(),
            bio: self.bio.trim().to_string(),
            profile_image_url: optional(&self.profile_image_url),
        }
    }
}

impl From<&PersonalInfo> for PersonalInfoForm {
    fn from(info: &PersonalInfo) -> Self {
        Self {
            name: info.name.clone(),
            title: info.title.clone(),
            email: info.email.clone(),
            phone: info.phone.clone(),
            location: info.location.clone(),
            linkedin: info.linkedin.clone(),
            github: info.github.clone(),
            website: info.website.clone(),
            bio: info.bio.clone(),
            profile_image_url: info.profile_image_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub category: String,
    pub image_url: String,
    pub github_url: String,
    pub live_url: String,
}

impl ProjectForm {
    pub fn into_project(self) -> Project {
        Project {
            id: id_or_new(&self.id),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            technologies: split_list(&self.technologies),
            category: ProjectCategory::parse_lenient(&self.category),
            image_url: optional(&self.image_url),
            github_url: optional(&self.github_url),
            live_url: optional(&self.live_url),
        }
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.join(", "),
            category: project.category.display().to_string(),
            image_url: project.image_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub r#abstract: String,
    pub authors: String,
    pub tags: String,
    pub published_date: String,
    pub journal: String,
    pub conference: String,
    pub paper_url: String,
}

impl ResearchForm {
    pub fn into_research(self) -> ResearchProject {
        ResearchProject {
            id: id_or_new(&self.id),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            r#abstract: self.r#abstract.trim().to_string(),
            authors: split_list(&self.authors),
            tags: split_list(&self.tags),
            published_date: optional(&self.published_date),
            journal: optional(&self.journal),
            conference: optional(&self.conference),
            paper_url: optional(&self.paper_url),
        }
    }
}

impl From<&ResearchProject> for ResearchForm {
    fn from(research: &ResearchProject) -> Self {
        Self {
            id: research.id.clone(),
            title: research.title.clone(),
            description: research.description.clone(),
            r#abstract: research.r#abstract.clone(),
            authors: research.authors.join(", "),
            tags: research.tags.join(", "),
            published_date: research.published_date.clone().unwrap_or_default(),
            journal: research.journal.clone().unwrap_or_default(),
            conference: research.conference.clone().unwrap_or_default(),
            paper_url: research.paper_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceForm {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// One bullet per line
    pub description: String,
    pub technologies: String,
}

impl ExperienceForm {
    pub fn into_experience(self) -> Experience {
        Experience {
            id: id_or_new(&self.id),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: optional(&self.end_date),
            description: split_lines(&self.description),
            technologies: optional_list(split_list(&self.technologies)),
        }
    }
}

impl From<&Experience> for ExperienceForm {
    fn from(exp: &Experience) -> Self {
        Self {
            id: exp.id.clone(),
            title: exp.title.clone(),
            company: exp.company.clone(),
            location: exp.location.clone(),
            start_date: exp.start_date.clone(),
            end_date: exp.end_date.clone().unwrap_or_default(),
            description: exp.description.join("\n"),
            technologies: exp.technologies.as_deref().unwrap_or_default().join(", "),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationForm {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub relevant_courses: String,
}

impl EducationForm {
    pub fn into_education(self) -> Education {
        Education {
            id: id_or_new(&self.id),
            degree: self.degree.trim().to_string(),
            institution: self.institution.trim().to_string(),
            location: self.location.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: optional(&self.end_date),
            gpa: optional(&self.gpa),
            relevant_courses: optional_list(split_list(&self.relevant_courses)),
        }
    }
}

impl From<&Education> for EducationForm {
    fn from(edu: &Education) -> Self {
        Self {
            id: edu.id.clone(),
            degree: edu.degree.clone(),
            institution: edu.institution.clone(),
            location: edu.location.clone(),
            start_date: edu.start_date.clone(),
            end_date: edu.end_date.clone().unwrap_or_default(),
            gpa: edu.gpa.clone().unwrap_or_default(),
            relevant_courses: edu.relevant_courses.as_deref().unwrap_or_default().join(", "),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillForm {
    pub name: String,
    pub level: String,
    pub category: String,
}

impl SkillForm {
    pub fn into_skill(self) -> Skill {
        Skill {
            name: self.name.trim().to_string(),
            level: SkillLevel::parse_lenient(&self.level),
            category: SkillCategory::parse_lenient(&self.category),
        }
    }
}

impl From<&Skill> for SkillForm {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level.display().to_string(),
            category: skill.category.display().to_string(),
        }
    }
}
