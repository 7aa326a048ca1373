//! Author page handlers

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
    models::author::AuthorForm,
    views,
    web::forms::{flatten_errors, parse_optional_date, FieldError},
    AppState,
};

/// List all authors, sorted by family name
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.services.catalog.list_authors().await?;
    Ok(views::authors::list(&authors))
}

/// Author detail: the author and all their books
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (author, books) = state.services.catalog.author_detail(id).await?;
    Ok(views::authors::detail(&author, &books))
}

/// Blank author create form
pub async fn create_form() -> Markup {
    views::authors::create_form(&AuthorForm::default(), &[])
}

/// Author create: validate, re-render the form with errors and the submitted
/// values, or persist and redirect to the new author's detail page.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Response> {
    let form = form.trimmed();
    let mut errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => flatten_errors(&e),
    };

    let date_of_birth = parse_optional_date(&form.date_of_birth).unwrap_or_else(|msg| {
        errors.push(FieldError::new("date_of_birth", format!("Date of birth {}", msg)));
        None
    });
    let date_of_death = parse_optional_date(&form.date_of_death).unwrap_or_else(|msg| {
        errors.push(FieldError::new("date_of_death", format!("Date of death {}", msg)));
        None
    });

    if !errors.is_empty() {
        let body = views::authors::create_form(&form, &errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
    }

    let author = state
        .services
        .catalog
        .create_author(
            &form.first_name,
            &form.family_name,
            date_of_birth,
            date_of_death,
        )
        .await?;

    Ok(Redirect::to(&author.url()).into_response())
}
