//! Data models for the Lil Library catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

pub use author::{Author, AuthorForm};
pub use book::{Book, BookForm, BookListRow, BookSummary};
pub use book_instance::{BookInstance, BookInstanceForm, BookInstanceRow, InstanceStatus};
pub use genre::{Genre, GenreForm};
