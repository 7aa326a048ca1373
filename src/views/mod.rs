//! Server-side HTML views rendered with maud.
//!
//! Every page shares the [`layout`] shell (sidebar navigation plus a content
//! column). Dynamic content is escaped by maud; the only pre-escaped block is
//! the static stylesheet.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod home;

use axum::http::StatusCode;
use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::web::forms::FieldError;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; color: #212529; }
.container { display: flex; min-height: 100vh; }
.sidebar { width: 220px; padding: 1.5em 1em; background: #f8f9fa; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar li { margin: 0.5em 0; }
.content { flex: 1; padding: 1.5em 2em; }
a { color: #0d6efd; text-decoration: none; }
a:hover { text-decoration: underline; }
.form-group { margin-bottom: 1em; }
.form-group label { display: block; margin-bottom: 0.25em; font-weight: bold; }
.form-group input, .form-group select, .form-group textarea { width: 100%; max-width: 30em; padding: 0.4em; }
.checkbox label { font-weight: normal; }
button[type=submit] { padding: 0.5em 1.5em; margin-top: 0.5em; }
ul.errors { color: #dc3545; }
.text-muted { color: #6c757d; }
.status-available { color: #198754; }
.status-maintenance { color: #dc3545; }
.status-loaned, .status-reserved { color: #fd7e14; }
"#;

/// Page shell: sidebar navigation plus the rendered page content
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="container" {
                    nav class="sidebar" {
                        ul {
                            li { a href="/catalog" { "Home" } }
                            li { a href="/catalog/books" { "All books" } }
                            li { a href="/catalog/authors" { "All authors" } }
                            li { a href="/catalog/genres" { "All genres" } }
                            li { a href="/catalog/bookinstances" { "All book instances" } }
                            li { a href="/catalog/books/create" { "Create new book" } }
                            li { a href="/catalog/authors/create" { "Create new author" } }
                            li { a href="/catalog/genres/create" { "Create new genre" } }
                            li { a href="/catalog/bookinstances/create" { "Create new book instance (copy)" } }
                        }
                    }
                    main class="content" { (content) }
                }
            }
        }
    }
}

/// Error page for AppError responses (404, 500, ...)
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        "Error | Lil Library",
        html! {
            h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p { (message) }
            p { a href="/catalog" { "Back to the catalog" } }
        },
    )
}

/// Validation errors rendered under a form
pub(crate) fn error_list(errors: &[FieldError]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul class="errors" {
                @for e in errors {
                    li { (e.message) }
                }
            }
        }
    }
}

/// Optional date for display, `-` when absent
pub(crate) fn fmt_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_escapes_title() {
        let page = layout("<script>", html! { p { "hi" } }).into_string();
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn error_page_shows_status_and_message() {
        let page = error_page(StatusCode::NOT_FOUND, "Author 7 not found").into_string();
        assert!(page.contains("404 Not Found"));
        assert!(page.contains("Author 7 not found"));
    }

    #[test]
    fn fmt_date_handles_missing() {
        assert_eq!(fmt_date(None), "-");
        let d = NaiveDate::from_ymd_opt(2020, 1, 3);
        assert_eq!(fmt_date(d), "Jan 3, 2020");
    }
}
