//! Genre page handlers

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
    models::genre::GenreForm,
    services::catalog::GenreCreated,
    views,
    web::forms::flatten_errors,
    AppState,
};

/// List all genres, sorted by name
pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.services.catalog.list_genres().await?;
    Ok(views::genres::list(&genres))
}

/// Genre detail: the genre and all books tagged with it
pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Markup> {
    let (genre, books) = state.services.catalog.genre_detail(id).await?;
    Ok(views::genres::detail(&genre, &books))
}

/// Blank genre create form
pub async fn create_form() -> Markup {
    views::genres::create_form(&GenreForm::default(), &[])
}

/// Genre create. A genre whose name already exists is not duplicated; the
/// response redirects to the existing genre instead.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let form = form.trimmed();

    if let Err(e) = form.validate() {
        let body = views::genres::create_form(&form, &flatten_errors(&e));
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
    }

    let genre = match state.services.catalog.create_genre(&form.name).await? {
        GenreCreated::New(genre) => genre,
        GenreCreated::AlreadyExists(genre) => genre,
    };

    Ok(Redirect::to(&genre.url()).into_response())
}
