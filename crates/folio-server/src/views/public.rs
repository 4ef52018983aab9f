// File: folio-server/src/views/public.rs
// Purpose: Public portfolio pages

use folio::model::{
    Education, Experience, PersonalInfo, Project, ProjectCategory, ResearchProject,
    SKILL_GROUP_ORDER,
};
use folio::PortfolioState;
use maud::{html, Markup};

use super::date_range;
use super::layout::page;

fn project_card(project: &Project) -> Markup {
    html! {
        article.project-card data-category=(project.category.wire()) {
            @if let Some(image) = &project.image_url {
                img src=(image) alt=(project.title);
            }
            h3 { (project.title) }
            span.category { (project.category) }
            p { (project.description) }
            ul.technologies {
                @for tech in &project.technologies {
                    li { (tech) }
                }
            }
            div.links {
                @if let Some(url) = &project.github_url {
                    a href=(url) { "Code" }
                }
                @if let Some(url) = &project.live_url {
                    a href=(url) { "Live Demo" }
                }
            }
        }
    }
}

fn research_card(research: &ResearchProject) -> Markup {
    html! {
        article.research-card {
            h3 { (research.title) }
            @if !research.authors.is_empty() {
                p.authors { (research.authors.join(", ")) }
            }
            p.venue {
                @if let Some(journal) = &research.journal {
                    span.journal { (journal) }
                }
                @if let Some(conference) = &research.conference {
                    span.conference { (conference) }
                }
                @if let Some(date) = &research.published_date {
                    time { (date) }
                }
            }
            p { (research.description) }
            @if !research.r#abstract.is_empty() {
                details {
                    summary { "Abstract" }
                    p { (research.r#abstract) }
                }
            }
            ul.tags {
                @for tag in &research.tags {
                    li { (tag) }
                }
            }
            @if let Some(url) = &research.paper_url {
                a href=(url) { "Read Paper" }
            }
        }
    }
}

fn skills_section(state: &PortfolioState) -> Markup {
    html! {
        section #skills {
            h2 { "Skills" }
            @for category in SKILL_GROUP_ORDER {
                @let skills = state.skills_in(category);
                @if !skills.is_empty() {
                    div.skill-group {
                        h3 { (category) }
                        ul {
                            @for skill in skills {
                                li {
                                    span.name { (skill.name) }
                                    span.level { (skill.level) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn contact_links(info: &PersonalInfo) -> Markup {
    html! {
        ul.contact-links {
            @if !info.email.is_empty() {
                li { a href={ "mailto:" (info.email) } { (info.email) } }
            }
            @if !info.phone.is_empty() {
                li { (info.phone) }
            }
            @if !info.location.is_empty() {
                li { (info.location) }
            }
            @if !info.github.is_empty() {
                li { a href=(info.github) { "GitHub" } }
            }
            @if !info.linkedin.is_empty() {
                li { a href=(info.linkedin) { "LinkedIn" } }
            }
            @if !info.website.is_empty() {
                li { a href=(info.website) { "Website" } }
            }
        }
    }
}

fn experience_entry(exp: &Experience) -> Markup {
    html! {
        article.experience {
            h3 { (exp.title) }
            p.company { (exp.company) @if !exp.location.is_empty() { ", " (exp.location) } }
            p.dates { (date_range(&exp.start_date, exp.end_date.as_deref())) }
            ul {
                @for bullet in &exp.description {
                    li { (bullet) }
                }
            }
            @if let Some(technologies) = &exp.technologies {
                p.technologies { (technologies.join(", ")) }
            }
        }
    }
}

fn education_entry(edu: &Education) -> Markup {
    html! {
        article.education {
            h3 { (edu.degree) }
            p.institution { (edu.institution) @if !edu.location.is_empty() { ", " (edu.location) } }
            p.dates { (date_range(&edu.start_date, edu.end_date.as_deref())) }
            @if let Some(gpa) = &edu.gpa {
                p.gpa { "GPA: " (gpa) }
            }
            @if let Some(courses) = &edu.relevant_courses {
                p.courses { "Relevant courses: " (courses.join(", ")) }
            }
        }
    }
}

pub fn home(state: &PortfolioState) -> Markup {
    let info = &state.personal_info;
    page(
        &info.name,
        &info.name,
        "/",
        html! {
            section #hero {
                @if let Some(image) = &info.profile_image_url {
                    img.profile src=(image) alt=(info.name);
                }
                h1 { (info.name) }
                p.title { (info.title) }
                p.bio { (info.bio) }
                (contact_links(info))
                div.actions {
                    a href="/projects" { "View My Work" }
                    a href="/contact" { "Get In Touch" }
                }
            }
            section #featured {
                h2 { "Featured Projects" }
                @for project in state.featured_projects() {
                    (project_card(project))
                }
                a href="/projects" { "View All Projects" }
            }
            (skills_section(state))
        },
    )
}

pub fn about(state: &PortfolioState) -> Markup {
    let info = &state.personal_info;
    page(
        &format!("About | {}", info.name),
        &info.name,
        "/about",
        html! {
            section #bio {
                h1 { "About Me" }
                p { (info.bio) }
            }
            section #experience {
                h2 { "Experience" }
                @for exp in &state.experience {
                    (experience_entry(exp))
                }
            }
            section #education {
                h2 { "Education" }
                @for edu in &state.education {
                    (education_entry(edu))
                }
            }
            (skills_section(state))
        },
    )
}

/// Project list, optionally filtered; `None` shows every category
pub fn projects(state: &PortfolioState, filter: Option<ProjectCategory>) -> Markup {
    let shown = state.projects_in(filter);
    page(
        &format!("Projects | {}", state.personal_info.name),
        &state.personal_info.name,
        "/projects",
        html! {
            h1 { "Projects" }
            nav.filters {
                a.active[filter.is_none()] href="/projects?category=all" { "All" }
                @for category in ProjectCategory::ALL.iter().copied() {
                    a.active[filter == Some(category)]
                        href={ "/projects?category=" (category.display()) } {
                        (category)
                    }
                }
            }
            @if shown.is_empty() {
                p.empty { "No projects found in this category." }
            } @else {
                div.grid {
                    @for project in shown {
                        (project_card(project))
                    }
                }
            }
        },
    )
}

pub fn research(state: &PortfolioState) -> Markup {
    page(
        &format!("Research | {}", state.personal_info.name),
        &state.personal_info.name,
        "/research",
        html! {
            h1 { "Research" }
            @if state.research_projects.is_empty() {
                p.empty { "No research projects yet." }
            }
            @for research in &state.research_projects {
                (research_card(research))
            }
        },
    )
}

/// Contact page; `sent` shows the acknowledgement instead of an empty form
pub fn contact(state: &PortfolioState, sent: bool) -> Markup {
    let info = &state.personal_info;
    page(
        &format!("Contact | {}", info.name),
        &info.name,
        "/contact",
        html! {
            h1 { "Get In Touch" }
            (contact_links(info))
            @if sent {
                p.notice role="status" { "Thank you for your message! I'll get back to you soon." }
            }
            form method="post" action="/contact" {
                label { "Name" input type="text" name="name" required; }
                label { "Email" input type="email" name="email" required; }
                label { "Subject" input type="text" name="subject" required; }
                label { "Message" textarea name="message" rows="6" required {} }
                button type="submit" { "Send Message" }
            }
        },
    )
}
