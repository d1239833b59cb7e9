use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::domain::{ApiError, Health, Movie};
use crate::validation::{validate_create, validate_update};

pub type AppState = crate::state::AppState;

pub async fn index() -> &'static str {
    "Welcome to my Movie API"
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: chrono::Utc::now(),
    })
}

pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.repo().get_all())
}

pub async fn get_movie(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(state.repo().get_one(id)?))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let input = validate_create(&body)?;
    let movie = state.repo().create(input);
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Movie>, ApiError> {
    let patch = validate_update(&body)?;
    Ok(Json(state.repo().update(id, patch)?))
}

pub async fn delete_movie(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    state.repo().delete_one(id)?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}
