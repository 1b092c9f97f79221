//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{extract::Path, http::StatusCode, Json};
use std::sync::Arc;
use uuid::Uuid;

/// List all films
pub async fn list_films(service: Arc<Service>) -> Result<Json<FilmsListResponse>, Problem> {
    let films = service.get_all().await.map_err(map_domain_error)?;

    let items: Vec<FilmDto> = films.into_iter().map(|f| f.into()).collect();
    let total = items.len();

    Ok(Json(FilmsListResponse { items, total }))
}

/// Get a specific film
pub async fn get_film(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
) -> Result<Json<FilmDto>, Problem> {
    let film = service
        .get_by_id(id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| {
            Problem::new(StatusCode::NOT_FOUND, "Film Not Found")
                .with_detail(format!("film with id '{}' was not found", id))
        })?;

    Ok(Json(film.into()))
}

/// Create a film
pub async fn create_film(
    service: Arc<Service>,
    Json(req): Json<CreateFilmRequest>,
) -> Result<(StatusCode, Json<FilmDto>), Problem> {
    let film = service.create(req.into()).await.map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(film.into())))
}

/// Apply a partial update to a film
pub async fn update_film(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFilmRequest>,
) -> Result<Json<FilmDto>, Problem> {
    let film = service
        .update(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(film.into()))
}

/// Soft-delete a film
pub async fn delete_film(service: Arc<Service>, Path(id): Path<Uuid>) -> Result<StatusCode, Problem> {
    service.delete(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
