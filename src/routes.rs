use axum::routing::get;
use axum::Router;

use crate::handlers::AppState;
use crate::handlers::{
    create_movie, delete_movie, get_movie, health, index, list_movies, update_movie,
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/:id",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}
