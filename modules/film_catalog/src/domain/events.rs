/// Domain events for the film catalog
///
/// Events are published best-effort after every mutating operation; a failing
/// publisher is logged and never fails the operation itself.
use crate::contract::Film;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain event types for films
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum FilmEvent {
    /// Film was created
    FilmCreated(FilmChangedEvent),
    /// Film was updated
    FilmUpdated(FilmChangedEvent),
    /// Film was soft-deleted
    FilmDeleted(FilmDeletedEvent),
}

/// Event data for film create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmChangedEvent {
    /// Film identifier
    pub film_id: Uuid,
    /// Title after the change
    pub title: String,
    /// Rating after the change
    pub rating: f64,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for film deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDeletedEvent {
    /// Film identifier
    pub film_id: Uuid,
    /// When the tombstone was set
    pub deleted_at: Option<DateTime<Utc>>,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a film event
    async fn publish(&self, event: FilmEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: FilmEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}

impl FilmEvent {
    /// Create a new FilmCreated event
    pub fn created(film: &Film) -> Self {
        FilmEvent::FilmCreated(FilmChangedEvent {
            film_id: film.id,
            title: film.title.clone(),
            rating: film.rating,
            timestamp: Utc::now(),
        })
    }

    /// Create a new FilmUpdated event
    pub fn updated(film: &Film) -> Self {
        FilmEvent::FilmUpdated(FilmChangedEvent {
            film_id: film.id,
            title: film.title.clone(),
            rating: film.rating,
            timestamp: Utc::now(),
        })
    }

    /// Create a new FilmDeleted event
    pub fn deleted(film: &Film) -> Self {
        FilmEvent::FilmDeleted(FilmDeletedEvent {
            film_id: film.id,
            deleted_at: film.deleted_at,
            timestamp: Utc::now(),
        })
    }
}
