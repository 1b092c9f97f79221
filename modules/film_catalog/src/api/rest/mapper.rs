//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

impl From<contract::Film> for FilmDto {
    fn from(film: contract::Film) -> Self {
        Self {
            id: film.id,
            title: film.title,
            rating: film.rating,
            created_at: film.created_at,
            updated_at: film.updated_at,
            completed_at: film.completed_at,
            owner_id: film.owner_id,
        }
    }
}

impl From<CreateFilmRequest> for contract::NewFilm {
    fn from(req: CreateFilmRequest) -> Self {
        Self {
            title: req.title,
            rating: req.rating,
            completed_at: req.completed_at,
        }
    }
}

impl From<UpdateFilmRequest> for contract::FilmPatch {
    fn from(req: UpdateFilmRequest) -> Self {
        Self {
            title: req.title,
            rating: req.rating,
            completed_at: req.completed_at,
        }
    }
}
