//! Book page handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::Markup;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::BookForm,
    services::catalog::BookCreated,
    views,
    web::forms::{flatten_errors, FieldError},
    AppState,
};

/// List all books with their author, sorted by title
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.catalog.list_books().await?;
    Ok(views::books::list(&books))
}

/// Book detail: the book with author and genres, plus its copies
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (book, instances) = state.services.catalog.book_detail(id).await?;
    Ok(views::books::detail(&book, &instances))
}

/// Book create form, populated with all authors and genres
pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let (authors, genres) = state.services.catalog.book_form_data().await?;
    Ok(views::books::create_form(
        &BookForm::default(),
        &authors,
        &genres,
        &[],
    ))
}

/// Book create: validate, re-render with errors and the submitted values
/// (author selection and genre checkboxes included), or persist and redirect.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let form = form.trimmed();
    let mut errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => flatten_errors(&e),
    };

    if form.author.is_none() {
        errors.push(FieldError::new("author", "Author must be specified"));
    }

    if errors.is_empty() {
        if let Some(author_id) = form.author {
            match state
                .services
                .catalog
                .create_book(&form.title, author_id, &form.summary, &form.isbn, &form.genre)
                .await?
            {
                BookCreated::Created(book) => {
                    return Ok(Redirect::to(&book.url()).into_response());
                }
                BookCreated::MissingAuthor => {
                    errors.push(FieldError::new("author", "Selected author does not exist"));
                }
                BookCreated::MissingGenres => {
                    errors.push(FieldError::new(
                        "genre",
                        "One or more selected genres do not exist",
                    ));
                }
            }
        }
    }

    let (authors, genres) = state.services.catalog.book_form_data().await?;
    let body = views::books::create_form(&form, &authors, &genres, &errors);
    Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response())
}
