//! Catalog service: read and create operations over the four record kinds

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookListRow, BookSummary},
        book_instance::{BookInstance, BookInstanceRow, InstanceStatus},
        genre::Genre,
    },
    repository::Repository,
};

/// Counts shown on the home page
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCounts {
    pub books: i64,
    pub book_instances: i64,
    pub available_book_instances: i64,
    pub authors: i64,
    pub genres: i64,
}

/// Outcome of a genre create: either a fresh row or the pre-existing genre
/// with the same name (the dedupe case redirects instead of inserting).
pub enum GenreCreated {
    New(Genre),
    AlreadyExists(Genre),
}

/// Outcome of a book create. Missing references mean the form was submitted
/// with ids that no longer exist; the handler re-renders instead of failing.
pub enum BookCreated {
    Created(Book),
    MissingAuthor,
    MissingGenres,
}

/// Outcome of a copy create
pub enum InstanceCreated {
    Created(BookInstance),
    MissingBook,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Gather the five home page counts concurrently
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (books, book_instances, available_book_instances, authors, genres) = tokio::try_join!(
            self.repository.books.count(),
            self.repository.book_instances.count(),
            self.repository.book_instances.count_available(),
            self.repository.authors.count(),
            self.repository.genres.count(),
        )?;

        Ok(CatalogCounts {
            books,
            book_instances,
            available_book_instances,
            authors,
            genres,
        })
    }

    // =========================================================================
    // AUTHORS
    // =========================================================================

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Author detail: the author plus all their books
    pub async fn author_detail(&self, id: i32) -> AppResult<(Author, Vec<BookSummary>)> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.get(id),
            self.repository.books.by_author(id),
        )?;

        let author =
            author.ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

        Ok((author, books))
    }

    pub async fn create_author(
        &self,
        first_name: &str,
        family_name: &str,
        date_of_birth: Option<NaiveDate>,
        date_of_death: Option<NaiveDate>,
    ) -> AppResult<Author> {
        let author = self
            .repository
            .authors
            .create(first_name, family_name, date_of_birth, date_of_death)
            .await?;

        tracing::info!("Created author id={} ({})", author.id, author.name());
        Ok(author)
    }

    // =========================================================================
    // GENRES
    // =========================================================================

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// Genre detail: the genre plus all books tagged with it
    pub async fn genre_detail(&self, id: i32) -> AppResult<(Genre, Vec<BookSummary>)> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.get(id),
            self.repository.books.by_genre(id),
        )?;

        let genre = genre.ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))?;

        Ok((genre, books))
    }

    /// Create a genre, deduplicating on name. When a genre with the same name
    /// (case-insensitive) already exists, it is returned instead of inserting.
    pub async fn create_genre(&self, name: &str) -> AppResult<GenreCreated> {
        if let Some(existing) = self.repository.genres.find_by_name(name).await? {
            tracing::debug!("Genre '{}' already exists as id={}", name, existing.id);
            return Ok(GenreCreated::AlreadyExists(existing));
        }

        let genre = self.repository.genres.create(name).await?;
        tracing::info!("Created genre id={} ({})", genre.id, genre.name);
        Ok(GenreCreated::New(genre))
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    pub async fn list_books(&self) -> AppResult<Vec<BookListRow>> {
        self.repository.books.list().await
    }

    pub async fn list_book_summaries(&self) -> AppResult<Vec<BookSummary>> {
        self.repository.books.list_summaries().await
    }

    /// Book detail: the book (author and genres populated) plus its copies
    pub async fn book_detail(&self, id: i32) -> AppResult<(Book, Vec<BookInstance>)> {
        let (book, instances) = tokio::try_join!(
            self.repository.books.get(id),
            self.repository.book_instances.by_book(id),
        )?;

        let book = book.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        Ok((book, instances))
    }

    /// Data needed by the book create form: all authors and all genres
    pub async fn book_form_data(&self) -> AppResult<(Vec<Author>, Vec<Genre>)> {
        tokio::try_join!(self.repository.authors.list(), self.repository.genres.list())
    }

    /// Create a book. A missing author or genre reference is reported as a
    /// typed outcome rather than an error.
    pub async fn create_book(
        &self,
        title: &str,
        author_id: i32,
        summary: &str,
        isbn: &str,
        genre_ids: &[i32],
    ) -> AppResult<BookCreated> {
        if !self.repository.authors.exists(author_id).await? {
            return Ok(BookCreated::MissingAuthor);
        }

        if !genre_ids.is_empty() {
            let found = self.repository.genres.count_existing(genre_ids).await?;
            if found != genre_ids.len() as i64 {
                return Ok(BookCreated::MissingGenres);
            }
        }

        let book = self
            .repository
            .books
            .create(title, author_id, summary, isbn, genre_ids)
            .await?;

        tracing::info!("Created book id={} ({})", book.id, book.title);
        Ok(BookCreated::Created(book))
    }

    // =========================================================================
    // BOOK INSTANCES
    // =========================================================================

    pub async fn list_book_instances(&self) -> AppResult<Vec<BookInstanceRow>> {
        self.repository.book_instances.list().await
    }

    pub async fn book_instance_detail(&self, id: i32) -> AppResult<BookInstanceRow> {
        self.repository
            .book_instances
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Create a copy. A missing book reference is reported as a typed outcome
    /// rather than an error.
    pub async fn create_book_instance(
        &self,
        book_id: i32,
        imprint: &str,
        status: InstanceStatus,
        due_back: Option<NaiveDate>,
    ) -> AppResult<InstanceCreated> {
        if !self.repository.books.exists(book_id).await? {
            return Ok(InstanceCreated::MissingBook);
        }

        let instance = self
            .repository
            .book_instances
            .create(book_id, imprint, status, due_back)
            .await?;

        tracing::info!(
            "Created book instance id={} for book id={}",
            instance.id,
            book_id
        );
        Ok(InstanceCreated::Created(instance))
    }
}
