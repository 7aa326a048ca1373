//! Author model and related types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, "Family, First"
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Lifespan as birth/death years, e.g. `1920 - 1999`, `1920 -`, or empty
    /// when neither date is known.
    pub fn lifespan(&self) -> String {
        match (self.date_of_birth, self.date_of_death) {
            (Some(b), Some(d)) => format!("{} - {}", b.year(), d.year()),
            (Some(b), None) => format!("{} -", b.year()),
            (None, Some(d)) => format!("- {}", d.year()),
            (None, None) => String::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("/catalog/authors/{}", self.id)
    }
}

/// Author create form fields. Dates arrive as raw `YYYY-MM-DD` text from the
/// date inputs and are parsed by the handler so a bad value becomes a field
/// error instead of a deserialization failure.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct AuthorForm {
    #[validate(length(min = 1, max = 100, message = "First name must be specified"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Family name must be specified"))]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

impl AuthorForm {
    /// Strip surrounding whitespace so validation sees the values that would
    /// be stored. A whitespace-only name must fail the required check.
    pub fn trimmed(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.family_name = self.family_name.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Author {
        Author {
            id: 1,
            first_name: "Patrick".into(),
            family_name: "Rothfuss".into(),
            date_of_birth: birth,
            date_of_death: death,
        }
    }

    #[test]
    fn name_is_family_first() {
        assert_eq!(author(None, None).name(), "Rothfuss, Patrick");
    }

    #[test]
    fn lifespan_formats() {
        let b = NaiveDate::from_ymd_opt(1973, 6, 6);
        let d = NaiveDate::from_ymd_opt(2041, 1, 1);
        assert_eq!(author(b, d).lifespan(), "1973 - 2041");
        assert_eq!(author(b, None).lifespan(), "1973 -");
        assert_eq!(author(None, d).lifespan(), "- 2041");
        assert_eq!(author(None, None).lifespan(), "");
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        let form = AuthorForm {
            first_name: "   ".into(),
            family_name: "\t ".into(),
            ..Default::default()
        }
        .trimmed();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("family_name"));
    }

    #[test]
    fn form_requires_both_names() {
        let form = AuthorForm {
            first_name: String::new(),
            family_name: "Rothfuss".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(!errors.field_errors().contains_key("family_name"));
    }
}
