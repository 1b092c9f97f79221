//! Repository trait for data access
//!
//! This trait defines the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Film;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence abstraction for film records
///
/// Deletion state is NOT filtered at this level: hiding soft-deleted records
/// from reads is a service rule, and the delete path has to observe
/// tombstones to stay idempotent.
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Find a film by id, deleted or not
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Film>>;

    /// List all films, deleted included, in storage order
    async fn find_all(&self) -> Result<Vec<Film>>;

    /// Insert or update a film keyed on id
    ///
    /// Returns the persisted snapshot rather than aliasing the input.
    async fn save(&self, film: &Film) -> Result<Film>;
}
