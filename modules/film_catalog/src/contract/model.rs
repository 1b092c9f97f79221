//! Contract models for the film catalog
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A film record as seen by callers of the service
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    /// Unique identifier, minted by the service at creation time
    pub id: Uuid,
    /// Human-readable title
    pub title: String,
    /// Score in the 0.0..=10.0 range
    pub rating: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// When the film was finished watching
    pub completed_at: Option<DateTime<Utc>>,
    /// Soft delete timestamp
    pub deleted_at: Option<DateTime<Utc>>,
    /// Owning user account; reserved for the account link, not yet persisted
    pub owner_id: Option<Uuid>,
}

impl Film {
    /// Whether the record carries a soft-delete tombstone
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input for creating a film record
#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    /// Title of the film to track
    pub title: String,
    /// Initial score
    pub rating: f64,
    /// Set when the film has already been watched
    pub completed_at: Option<DateTime<Utc>>,
}

/// Partial update for a film record
///
/// `None` fields keep the stored value; only supplied fields overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmPatch {
    /// New title
    pub title: Option<String>,
    /// New score
    pub rating: Option<f64>,
    /// Mark the film as finished at this instant
    pub completed_at: Option<DateTime<Utc>>,
}

impl FilmPatch {
    /// Apply the supplied fields onto an existing record.
    ///
    /// Identity and deletion state of `film` are preserved; timestamp
    /// bookkeeping (`updated_at`) is the caller's responsibility.
    pub fn apply(&self, mut film: Film) -> Film {
        if let Some(title) = &self.title {
            film.title = title.clone();
        }
        if let Some(rating) = self.rating {
            film.rating = rating;
        }
        if let Some(completed_at) = self.completed_at {
            film.completed_at = Some(completed_at);
        }
        film
    }

    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.rating.is_none() && self.completed_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_film() -> Film {
        Film {
            id: Uuid::new_v4(),
            title: "Test Filme".to_string(),
            rating: 5.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
            deleted_at: None,
            owner_id: None,
        }
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let film = sample_film();
        let id = film.id;

        let patch = FilmPatch {
            title: Some("Updated Title".to_string()),
            rating: None,
            completed_at: None,
        };
        let merged = patch.apply(film);

        assert_eq!(merged.id, id);
        assert_eq!(merged.title, "Updated Title");
        assert_eq!(merged.rating, 5.0);
        assert!(merged.completed_at.is_none());
    }

    #[test]
    fn test_patch_preserves_deletion_state() {
        let mut film = sample_film();
        film.deleted_at = Some(Utc::now());
        let tombstone = film.deleted_at;

        let patch = FilmPatch {
            rating: Some(9.0),
            ..FilmPatch::default()
        };
        let merged = patch.apply(film);

        assert_eq!(merged.deleted_at, tombstone);
        assert_eq!(merged.rating, 9.0);
    }

    #[test]
    fn test_empty_patch() {
        assert!(FilmPatch::default().is_empty());
        assert!(!FilmPatch {
            title: Some("x".to_string()),
            ..FilmPatch::default()
        }
        .is_empty());
    }
}
