//! HTTP handlers for the catalog pages

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod forms;
pub mod genres;
pub mod health;
pub mod home;
