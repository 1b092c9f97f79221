//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! film catalog. NO HTTP - direct function calls for performance.

use super::{
    error::FilmError,
    model::{Film, FilmPatch, NewFilm},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Film catalog API for in-process communication
#[async_trait]
pub trait FilmCatalogApi: Send + Sync {
    /// Create a film record
    async fn create(&self, new_film: NewFilm) -> Result<Film, FilmError>;

    /// Fetch a film by id; soft-deleted films read as absent
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Film>, FilmError>;

    /// List every film that has not been deleted
    async fn get_all(&self) -> Result<Vec<Film>, FilmError>;

    /// Apply a partial update to an existing film
    async fn update(&self, id: Uuid, patch: FilmPatch) -> Result<Film, FilmError>;

    /// Soft-delete a film; a no-op when absent or already deleted
    async fn delete(&self, id: Uuid) -> Result<(), FilmError>;
}
