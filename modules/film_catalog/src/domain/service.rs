//! Domain service - business logic orchestration

use super::events::{EventPublisher, FilmEvent};
use super::repository::FilmRepository;
use super::validation;
use crate::config::Config;
use crate::contract::{Film, FilmError, FilmPatch, NewFilm};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for the film catalog
pub struct Service {
    repo: Arc<dyn FilmRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    config: Config,
}

impl Service {
    /// Create a new service instance with default configuration
    pub fn new(repo: Arc<dyn FilmRepository>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self::with_config(repo, event_publisher, Config::default())
    }

    /// Create a new service instance
    pub fn with_config(
        repo: Arc<dyn FilmRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            event_publisher,
            config,
        }
    }

    /// Create a film record
    ///
    /// The id is minted here; ids carried by the caller are ignored.
    pub async fn create(&self, new_film: NewFilm) -> Result<Film, FilmError> {
        validation::validate_title(&new_film.title, &self.config)?;
        validation::validate_rating(new_film.rating, &self.config)?;

        let now = Utc::now();
        let film = Film {
            id: Uuid::new_v4(),
            title: new_film.title,
            rating: new_film.rating,
            created_at: now,
            updated_at: now,
            completed_at: new_film.completed_at,
            deleted_at: None,
            owner_id: None,
        };

        let saved = self.repo.save(&film).await.map_err(internal)?;

        self.publish(FilmEvent::created(&saved)).await;
        Ok(saved)
    }

    /// Fetch a film by id
    ///
    /// Soft-deleted films are invisible to readers and resolve to `None`.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Film>, FilmError> {
        let film = self.repo.find_by_id(id).await.map_err(internal)?;
        Ok(film.filter(|f| !f.is_deleted()))
    }

    /// List all films, excluding soft-deleted records
    ///
    /// Order is whatever the repository provides.
    pub async fn get_all(&self) -> Result<Vec<Film>, FilmError> {
        let films = self.repo.find_all().await.map_err(internal)?;
        Ok(films.into_iter().filter(|f| !f.is_deleted()).collect())
    }

    /// Apply a partial update to an existing film
    ///
    /// Fails with `NotFound` when the id resolves to nothing or to a
    /// soft-deleted record; deleted films cannot be resurrected through
    /// update.
    pub async fn update(&self, id: Uuid, patch: FilmPatch) -> Result<Film, FilmError> {
        if let Some(title) = &patch.title {
            validation::validate_title(title, &self.config)?;
        }
        if let Some(rating) = patch.rating {
            validation::validate_rating(rating, &self.config)?;
        }

        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .filter(|f| !f.is_deleted())
            .ok_or(FilmError::NotFound { id })?;

        let mut film = patch.apply(existing);
        film.updated_at = Utc::now();

        let saved = self.repo.save(&film).await.map_err(internal)?;

        self.publish(FilmEvent::updated(&saved)).await;
        Ok(saved)
    }

    /// Soft-delete a film
    ///
    /// Absent ids and already-deleted records are a silent no-op, so the
    /// operation stays idempotent and issues at most one write.
    pub async fn delete(&self, id: Uuid) -> Result<(), FilmError> {
        let Some(mut film) = self.repo.find_by_id(id).await.map_err(internal)? else {
            return Ok(());
        };

        if film.is_deleted() {
            return Ok(());
        }

        film.deleted_at = Some(Utc::now());
        let saved = self.repo.save(&film).await.map_err(internal)?;

        self.publish(FilmEvent::deleted(&saved)).await;
        Ok(())
    }

    /// Publish a domain event, logging failures instead of propagating them
    async fn publish(&self, event: FilmEvent) {
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!("failed to publish film event: {:#}", e);
        }
    }
}

/// Map a repository failure to the opaque internal error
fn internal(err: anyhow::Error) -> FilmError {
    tracing::error!("repository failure: {:?}", err);
    FilmError::Internal
}
