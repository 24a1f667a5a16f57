//! HTTP handlers for the movie resource.
//!
//! Five routes under `/movies`. Successful creates answer 200 (not 201),
//! deletes answer with plain-text `Success`, and validation failures are
//! plain-text while not-found errors are JSON-wrapped.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::movies::store::{MovieStore, StoreError};
use crate::movies::validation::validate_movie;

/// Build the movie resource router.
pub fn router(store: Arc<MovieStore>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .with_state(store)
}

/// Path identifiers are matched numerically; anything that does not parse
/// matches no record and falls through to 404 rather than a parse error.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": StoreError::NotFound.to_string() })),
    )
        .into_response()
}

/// GET /movies
async fn list_movies(State(store): State<Arc<MovieStore>>) -> Response {
    let movies = store.list().await;
    if movies.is_empty() {
        return Json(json!({ "message": "no movies yet!" })).into_response();
    }
    Json(movies).into_response()
}

/// GET /movies/{id}
async fn get_movie(State(store): State<Arc<MovieStore>>, Path(id): Path<String>) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found();
    };

    match store.get(id).await {
        Ok(movie) => Json(movie).into_response(),
        Err(StoreError::NotFound) => not_found(),
    }
}

/// POST /movies
async fn create_movie(State(store): State<Arc<MovieStore>>, Json(body): Json<Value>) -> Response {
    let draft = match validate_movie(&body) {
        Ok(draft) => draft,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let movie = store.create(draft).await;
    tracing::debug!(id = movie.id, name = %movie.name, "Movie created");

    // 200 rather than 201
    Json(movie).into_response()
}

/// PUT /movies/{id}
///
/// Existence is checked before the body is validated, so an unknown id
/// answers 404 even when the payload is invalid.
async fn update_movie(
    State(store): State<Arc<MovieStore>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found();
    };
    if !store.contains(id).await {
        return not_found();
    }

    let draft = match validate_movie(&body) {
        Ok(draft) => draft,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match store.update(id, draft).await {
        Ok(movie) => {
            tracing::debug!(id = movie.id, "Movie updated");
            Json(movie).into_response()
        }
        Err(StoreError::NotFound) => not_found(),
    }
}

/// DELETE /movies/{id}
async fn delete_movie(State(store): State<Arc<MovieStore>>, Path(id): Path<String>) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found();
    };

    match store.remove(id).await {
        Ok(()) => {
            tracing::debug!(id, "Movie deleted");
            "Success".into_response()
        }
        Err(StoreError::NotFound) => not_found(),
    }
}
