// File: folio-server/src/views/layout.rs
// Purpose: Page shells shared by every view

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

const NAV: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Projects", "/projects"),
    ("Research", "/research"),
    ("Contact", "/contact"),
];

fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
        }
    }
}

/// Public page with header navigation and footer
pub fn page(title: &str, site_name: &str, current: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body {
                header {
                    nav {
                        a.brand href="/" { (site_name) }
                        ul {
                            @for (label, href) in NAV {
                                li {
                                    @if href == current {
                                        a.active href=(href) aria-current="page" { (label) }
                                    } @else {
                                        a href=(href) { (label) }
                                    }
                                }
                            }
                        }
                    }
                }
                main { (content) }
                footer {
                    p { "© " (site_name) }
                    a href="/admin" { "Admin" }
                }
            }
        }
    }
}

/// Bare shell used by the login page and the dashboard
pub fn admin_page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body.admin {
                (content)
            }
        }
    }
}

/// Shown while the initial session check is still running
pub fn pending() -> Markup {
    admin_page(
        "Loading",
        html! {
            div.pending role="status" { "Checking session..." }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    admin_page(
        title,
        html! {
            h1 { (status.as_u16()) " " (title) }
            p { (message) }
            a href="/" { "Go Home" }
        },
    )
}
