//! Home page handler

use axum::extract::State;
use maud::Markup;

use crate::{error::AppResult, views, AppState};

/// Home page: record counts for the whole catalog
pub async fn index(State(state): State<AppState>) -> AppResult<Markup> {
    let counts = state.services.catalog.counts().await?;
    Ok(views::home::index(&counts))
}
