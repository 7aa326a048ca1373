//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::{author::Author, genre::Genre};

/// Full book model from database. Author and genres are populated by the
/// repository with follow-up queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: i32,
    #[sqlx(skip)]
    #[serde(default)]
    pub author: Option<Author>,
    #[sqlx(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Book {
    pub fn url(&self) -> String {
        format!("/catalog/books/{}", self.id)
    }
}

/// Row for the book list page (title joined with author name)
#[derive(Debug, Clone, FromRow)]
pub struct BookListRow {
    pub id: i32,
    pub title: String,
    pub author_name: String,
}

impl BookListRow {
    pub fn url(&self) -> String {
        format!("/catalog/books/{}", self.id)
    }
}

/// Minimal book reference (author/genre detail pages, instance create form)
#[derive(Debug, Clone, FromRow)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub summary: String,
}

impl BookSummary {
    pub fn url(&self) -> String {
        format!("/catalog/books/{}", self.id)
    }
}

/// Book create form fields. `genre` is a repeated checkbox field, decoded as
/// multiple values by the axum-extra form extractor.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub author: Option<i32>,
    #[validate(length(min = 1, message = "Summary must not be empty"))]
    pub summary: String,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
    #[serde(default)]
    pub genre: Vec<i32>,
}

impl BookForm {
    /// Strip surrounding whitespace so validation sees the values that would
    /// be stored.
    pub fn trimmed(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.summary = self.summary.trim().to_string();
        self.isbn = self.isbn.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_title_summary_isbn() {
        let form = BookForm {
            title: "The Name of the Wind".into(),
            author: Some(1),
            summary: String::new(),
            isbn: String::new(),
            genre: vec![],
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("summary"));
        assert!(fields.contains_key("isbn"));
        assert!(!fields.contains_key("title"));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let form = BookForm {
            title: "   ".into(),
            author: Some(1),
            summary: " \t".into(),
            isbn: "  ".into(),
            genre: vec![],
        }
        .trimmed();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("summary"));
        assert!(fields.contains_key("isbn"));
    }
}
