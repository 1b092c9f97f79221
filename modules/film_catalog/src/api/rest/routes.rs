//! Route registration for the film catalog REST API

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the film catalog router
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        // Film endpoints
        .route("/api/filmes", get(list_films_handler))
        .route("/api/filmes", post(create_film_handler))
        .route("/api/filmes/{id}", get(get_film_handler))
        .route("/api/filmes/{id}", put(update_film_handler))
        .route("/api/filmes/{id}", delete(delete_film_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_films_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<FilmsListResponse>, super::error::Problem> {
    handlers::list_films(service).await
}

async fn get_film_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::Json<FilmDto>, super::error::Problem> {
    handlers::get_film(service, path).await
}

async fn create_film_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<CreateFilmRequest>,
) -> Result<(axum::http::StatusCode, axum::Json<FilmDto>), super::error::Problem> {
    handlers::create_film(service, json).await
}

async fn update_film_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
    json: axum::Json<UpdateFilmRequest>,
) -> Result<axum::Json<FilmDto>, super::error::Problem> {
    handlers::update_film(service, path, json).await
}

async fn delete_film_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::http::StatusCode, super::error::Problem> {
    handlers::delete_film(service, path).await
}
