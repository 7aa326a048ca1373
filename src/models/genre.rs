//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full genre model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genres/{}", self.id)
    }
}

/// Genre create form fields
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct GenreForm {
    #[validate(length(min = 3, message = "Genre name must contain at least 3 characters"))]
    pub name: String,
}

impl GenreForm {
    /// Strip surrounding whitespace so validation sees the value that would
    /// be stored.
    pub fn trimmed(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_shorter_than_three_chars_is_rejected() {
        let form = GenreForm { name: "Sc".into() };
        assert!(form.validate().is_err());

        let form = GenreForm { name: "Sci-Fi".into() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_length() {
        let form = GenreForm { name: "  ab  ".into() }.trimmed();
        assert!(form.validate().is_err());
    }
}
