//! Book instance page handlers

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
    models::book_instance::{BookInstanceForm, InstanceStatus},
    services::catalog::InstanceCreated,
    views,
    web::forms::{flatten_errors, parse_optional_date, FieldError},
    AppState,
};

/// List all copies with their book title
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let instances = state.services.catalog.list_book_instances().await?;
    Ok(views::book_instances::list(&instances))
}

/// Copy detail, with its book
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let instance = state.services.catalog.book_instance_detail(id).await?;
    Ok(views::book_instances::detail(&instance))
}

/// Copy create form, populated with all books
pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.catalog.list_book_summaries().await?;
    Ok(views::book_instances::create_form(
        &BookInstanceForm::default(),
        &books,
        &[],
    ))
}

/// Copy create: validate, re-render with errors and the submitted values, or
/// persist and redirect to the new copy's detail page.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    let form = form.trimmed();
    let mut errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => flatten_errors(&e),
    };

    if form.book.is_none() {
        errors.push(FieldError::new("book", "Book must be specified"));
    }

    let status = match InstanceStatus::from_label(&form.status) {
        Some(status) => status,
        None => {
            errors.push(FieldError::new("status", "Invalid status"));
            InstanceStatus::Maintenance
        }
    };

    let due_back = parse_optional_date(&form.due_back).unwrap_or_else(|msg| {
        errors.push(FieldError::new("due_back", format!("Due back date {}", msg)));
        None
    });

    if errors.is_empty() {
        if let Some(book_id) = form.book {
            match state
                .services
                .catalog
                .create_book_instance(book_id, &form.imprint, status, due_back)
                .await?
            {
                InstanceCreated::Created(instance) => {
                    return Ok(Redirect::to(&instance.url()).into_response());
                }
                InstanceCreated::MissingBook => {
                    errors.push(FieldError::new("book", "Selected book does not exist"));
                }
            }
        }
    }

    let books = state.services.catalog.list_book_summaries().await?;
    let body = views::book_instances::create_form(&form, &books, &errors);
    Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response())
}
