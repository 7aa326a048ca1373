//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Copy circulation status (stored in book_instances.status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum InstanceStatus {
    Available = 0,
    Maintenance = 1,
    Loaned = 2,
    Reserved = 3,
}

impl InstanceStatus {
    pub const ALL: [InstanceStatus; 4] = [
        InstanceStatus::Available,
        InstanceStatus::Maintenance,
        InstanceStatus::Loaned,
        InstanceStatus::Reserved,
    ];

    /// Parse the value submitted by the status select
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Available" => Some(InstanceStatus::Available),
            "Maintenance" => Some(InstanceStatus::Maintenance),
            "Loaned" => Some(InstanceStatus::Loaned),
            "Reserved" => Some(InstanceStatus::Reserved),
            _ => None,
        }
    }
}

impl From<i16> for InstanceStatus {
    fn from(v: i16) -> Self {
        match v {
            0 => InstanceStatus::Available,
            2 => InstanceStatus::Loaned,
            3 => InstanceStatus::Reserved,
            _ => InstanceStatus::Maintenance,
        }
    }
}

impl From<InstanceStatus> for i16 {
    fn from(s: InstanceStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Maintenance => "Maintenance",
            InstanceStatus::Loaned => "Loaned",
            InstanceStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: i16,
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    pub fn status(&self) -> InstanceStatus {
        InstanceStatus::from(self.status)
    }

    pub fn url(&self) -> String {
        format!("/catalog/bookinstances/{}", self.id)
    }
}

/// Row for the instance list page (joined with book title)
#[derive(Debug, Clone, FromRow)]
pub struct BookInstanceRow {
    pub id: i32,
    pub book_id: i32,
    pub book_title: String,
    pub imprint: String,
    pub status: i16,
    pub due_back: Option<NaiveDate>,
}

impl BookInstanceRow {
    pub fn status(&self) -> InstanceStatus {
        InstanceStatus::from(self.status)
    }

    pub fn url(&self) -> String {
        format!("/catalog/bookinstances/{}", self.id)
    }
}

/// Book instance create form fields
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct BookInstanceForm {
    pub book: Option<i32>,
    #[validate(length(min = 1, message = "Imprint must not be empty"))]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

impl BookInstanceForm {
    /// Strip surrounding whitespace so validation sees the value that would
    /// be stored.
    pub fn trimmed(mut self) -> Self {
        self.imprint = self.imprint.trim().to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_through_db_code() {
        for status in InstanceStatus::ALL {
            assert_eq!(InstanceStatus::from(i16::from(status)), status);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_maintenance() {
        assert_eq!(InstanceStatus::from(42), InstanceStatus::Maintenance);
    }

    #[test]
    fn label_parse_matches_display() {
        for status in InstanceStatus::ALL {
            assert_eq!(InstanceStatus::from_label(&status.to_string()), Some(status));
        }
        assert_eq!(InstanceStatus::from_label("Lost"), None);
    }

    #[test]
    fn whitespace_only_imprint_is_rejected() {
        let form = BookInstanceForm {
            book: Some(1),
            imprint: "   ".into(),
            ..Default::default()
        }
        .trimmed();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("imprint"));
    }
}
