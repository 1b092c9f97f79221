//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Film, FilmCatalogApi, FilmError, FilmPatch, NewFilm};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl FilmCatalogApi for NativeClient {
    async fn create(&self, new_film: NewFilm) -> Result<Film, FilmError> {
        self.service.create(new_film).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Film>, FilmError> {
        self.service.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Film>, FilmError> {
        self.service.get_all().await
    }

    async fn update(&self, id: Uuid, patch: FilmPatch) -> Result<Film, FilmError> {
        self.service.update(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), FilmError> {
        self.service.delete(id).await
    }
}
