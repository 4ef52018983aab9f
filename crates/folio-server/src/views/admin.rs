// File: folio-server/src/views/admin.rs
// Purpose: Login page and the tabbed admin dashboard

use folio::form::{
    EducationForm, ExperienceForm, PersonalInfoForm, ProjectForm, ResearchForm, SkillForm,
};
use folio::model::{
    Education, Experience, Project, ProjectCategory, ResearchProject, Skill, SkillCategory,
    SkillLevel,
};
use folio::{Entity, PortfolioState};
use maud::{html, Markup};

use super::date_range;
use super::layout::admin_page;
use crate::admin::{Editing, Tab};

fn text_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        label {
            (label)
            input type="text" name=(name) value=(value);
        }
    }
}

fn required_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        label {
            (label)
            input type="text" name=(name) value=(value) required;
        }
    }
}

fn text_area(label: &str, name: &str, value: &str, hint: &str) -> Markup {
    html! {
        label {
            (label)
            textarea name=(name) rows="4" placeholder=(hint) { (value) }
        }
    }
}

fn select_field(label: &str, name: &str, options: &[&str], selected: &str) -> Markup {
    html! {
        label {
            (label)
            select name=(name) {
                @for choice in options {
                    option value=(choice) selected[choice.eq_ignore_ascii_case(selected)] { (choice) }
                }
            }
        }
    }
}

/// Per-collection rendering for the dashboard
pub trait Editable: Entity {
    const TAB: Tab;
    type Form: Default + for<'a> From<&'a Self>;

    /// One line in the collection list
    fn summary(&self) -> Markup;

    /// Inputs of the create/edit form
    fn fields(form: &Self::Form) -> Markup;
}

impl Editable for Project {
    const TAB: Tab = Tab::Projects;
    type Form = ProjectForm;

    fn summary(&self) -> Markup {
        html! {
            strong { (self.title) }
            " "
            span.category { (self.category) }
            p { (self.technologies.join(", ")) }
        }
    }

    fn fields(form: &ProjectForm) -> Markup {
        let categories: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.display()).collect();
        html! {
            input type="hidden" name="id" value=(form.id);
            (required_field("Title", "title", &form.title))
            (text_area("Description", "description", &form.description, ""))
            (text_field("Technologies (comma-separated)", "technologies", &form.technologies))
            (select_field("Category", "category", &categories, &form.category))
            (text_field("Image URL", "image_url", &form.image_url))
            (text_field("GitHub URL", "github_url", &form.github_url))
            (text_field("Live URL", "live_url", &form.live_url))
        }
    }
}

impl Editable for ResearchProject {
    const TAB: Tab = Tab::Research;
    type Form = ResearchForm;

    fn summary(&self) -> Markup {
        html! {
            strong { (self.title) }
            p { (self.authors.join(", ")) }
        }
    }

    fn fields(form: &ResearchForm) -> Markup {
        html! {
            input type="hidden" name="id" value=(form.id);
            (required_field("Title", "title", &form.title))
            (text_area("Description", "description", &form.description, ""))
            (text_area("Abstract", "abstract", &form.r#abstract, ""))
            (text_field("Authors (comma-separated)", "authors", &form.authors))
            (text_field("Tags (comma-separated)", "tags", &form.tags))
            (text_field("Published Date", "published_date", &form.published_date))
            (text_field("Journal", "journal", &form.journal))
            (text_field("Conference", "conference", &form.conference))
            (text_field("Paper URL", "paper_url", &form.paper_url))
        }
    }
}

impl Editable for Experience {
    const TAB: Tab = Tab::Experience;
    type Form = ExperienceForm;

    fn summary(&self) -> Markup {
        html! {
            strong { (self.title) }
            " at " (self.company)
            p { (date_range(&self.start_date, self.end_date.as_deref())) }
        }
    }

    fn fields(form: &ExperienceForm) -> Markup {
        html! {
            input type="hidden" name="id" value=(form.id);
            (required_field("Title", "title", &form.title))
            (required_field("Company", "company", &form.company))
            (text_field("Location", "location", &form.location))
            label { "Start Date" input type="month" name="start_date" value=(form.start_date); }
            label { "End Date (empty if current)" input type="month" name="end_date" value=(form.end_date); }
            (text_area("Description", "description", &form.description, "One point per line"))
            (text_field("Technologies (comma-separated)", "technologies", &form.technologies))
        }
    }
}

impl Editable for Education {
    const TAB: Tab = Tab::Education;
    type Form = EducationForm;

    fn summary(&self) -> Markup {
        html! {
            strong { (self.degree) }
            " - " (self.institution)
            p { (date_range(&self.start_date, self.end_date.as_deref())) }
        }
    }

    fn fields(form: &EducationForm) -> Markup {
        html! {
            input type="hidden" name="id" value=(form.id);
            (required_field("Degree", "degree", &form.degree))
            (required_field("Institution", "institution", &form.institution))
            (text_field("Location", "location", &form.location))
            label { "Start Date" input type="month" name="start_date" value=(form.start_date); }
            label { "End Date (empty if ongoing)" input type="month" name="end_date" value=(form.end_date); }
            (text_field("GPA", "gpa", &form.gpa))
            (text_field("Relevant Courses (comma-separated)", "relevant_courses", &form.relevant_courses))
        }
    }
}

impl Editable for Skill {
    const TAB: Tab = Tab::Skills;
    type Form = SkillForm;

    fn summary(&self) -> Markup {
        html! {
            strong { (self.name) }
            " " span.level { (self.level) }
            " " span.category { (self.category) }
        }
    }

    fn fields(form: &SkillForm) -> Markup {
        let levels: Vec<&str> = SkillLevel::ALL.iter().map(|l| l.display()).collect();
        let categories: Vec<&str> = SkillCategory::ALL.iter().map(|c| c.display()).collect();
        html! {
            (required_field("Name", "name", &form.name))
            (select_field("Level", "level", &levels, &form.level))
            (select_field("Category", "category", &categories, &form.category))
        }
    }
}

fn member_href(tab: Tab, key: &str) -> String {
    format!("/admin/{}/{}", tab.slug(), urlencoding::encode(key))
}

fn collection_panel<E: Editable>(state: &PortfolioState, editing: &Editing) -> Markup {
    let tab = E::TAB;
    let items = E::items(state);

    let editor = match editing {
        Editing::Closed => None,
        Editing::New => Some((E::Form::default(), format!("/admin/{}", tab.slug()))),
        Editing::Existing(key) => items
            .iter()
            .find(|item| item.key() == key.as_str())
            .map(|item| (E::Form::from(item), member_href(tab, key))),
    };

    html! {
        section.panel {
            div.panel-header {
                h2 { (tab.label()) }
                a.button href={ (tab.href()) "&new=1" } { "Add " (E::LABEL) }
            }
            @if let Some((form, action)) = &editor {
                form.editor method="post" action=(action) {
                    (E::fields(form))
                    button type="submit" { "Save" }
                    a href=(tab.href()) { "Cancel" }
                }
            } @else {
                @if let Editing::Existing(key) = editing {
                    p.notice { "No " (E::LABEL) " named " (key) "." }
                }
            }
            @if items.is_empty() {
                p.empty { "Nothing here yet." }
            }
            ul.records {
                @for item in items {
                    li {
                        div.summary { (item.summary()) }
                        a href={ (tab.href()) "&edit=" (urlencoding::encode(item.key())) } { "Edit" }
                        form.inline method="post" action={ (member_href(tab, item.key())) "/delete" }
                            onsubmit={ "return confirm('Are you sure you want to delete this " (E::LABEL) "?')" } {
                            button type="submit" { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

fn personal_panel(state: &PortfolioState) -> Markup {
    let form = PersonalInfoForm::from(&state.personal_info);
    html! {
        section.panel {
            h2 { (Tab::Personal.label()) }
            form.editor method="post" action="/admin/personal" {
                (required_field("Name", "name", &form.name))
                (required_field("Title", "title", &form.title))
                (text_field("Email", "email", &form.email))
                (text_field("Phone", "phone", &form.phone))
                (text_field("Location", "location", &form.location))
                (text_field("LinkedIn", "linkedin", &form.linkedin))
                (text_field("GitHub", "github", &form.github))
                (text_field("Website", "website", &form.website))
                (text_field("Profile Image URL", "profile_image_url", &form.profile_image_url))
                (text_area("Bio", "bio", &form.bio, ""))
                button type="submit" { "Save Changes" }
            }
        }
    }
}

pub fn dashboard(
    state: &PortfolioState,
    tab: Tab,
    editing: &Editing,
    notice: Option<&str>,
) -> Markup {
    let panel = match tab {
        Tab::Personal => personal_panel(state),
        Tab::Projects => collection_panel::<Project>(state, editing),
        Tab::Research => collection_panel::<ResearchProject>(state, editing),
        Tab::Experience => collection_panel::<Experience>(state, editing),
        Tab::Education => collection_panel::<Education>(state, editing),
        Tab::Skills => collection_panel::<Skill>(state, editing),
    };

    admin_page(
        "Admin Dashboard",
        html! {
            header {
                h1 { "Admin Dashboard" }
                a href="/" { "View Site" }
                form.inline method="post" action="/admin/logout" {
                    button type="submit" { "Logout" }
                }
            }
            nav.tabs {
                @for item in Tab::ALL {
                    a.active[item == tab] href=(item.href()) { (item.label()) }
                }
            }
            @if let Some(message) = notice {
                div.notice role="alert" { (message) }
            }
            (panel)
        },
    )
}

pub fn login(error: Option<&str>) -> Markup {
    admin_page(
        "Admin Login",
        html! {
            h1 { "Admin Login" }
            @if let Some(message) = error {
                p.error role="alert" { (message) }
            }
            form method="post" {
                label { "Username" input type="text" name="username" required; }
                label { "Password" input type="password" name="password" required; }
                button type="submit" { "Sign In" }
            }
            a href="/" { "Back to site" }
        },
    )
}
