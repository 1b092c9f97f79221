//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::Film;
use sea_orm::ActiveValue::{Set, Unchanged};

impl From<entity::Model> for Film {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            rating: entity.rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            completed_at: entity.completed_at,
            deleted_at: entity.deleted_at,
            // Not a column yet; reserved for the user-account link.
            owner_id: None,
        }
    }
}

impl From<&Film> for entity::ActiveModel {
    fn from(model: &Film) -> Self {
        Self {
            id: Set(model.id),
            title: Set(model.title.clone()),
            rating: Set(model.rating),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            completed_at: Set(model.completed_at),
            deleted_at: Set(model.deleted_at),
        }
    }
}

/// Build the active model for persisting `film` on top of `existing`.
///
/// With no existing row every column is set for insert. With an existing row
/// the identity and creation timestamp always come from storage, and the
/// tombstone survives unless the incoming record carries its own.
pub fn to_active_model(film: &Film, existing: Option<&entity::Model>) -> entity::ActiveModel {
    let mut active: entity::ActiveModel = film.into();

    if let Some(existing) = existing {
        active.id = Unchanged(existing.id);
        active.created_at = Set(existing.created_at);
        if film.deleted_at.is_none() {
            active.deleted_at = Set(existing.deleted_at);
        }
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_model() -> entity::Model {
        entity::Model {
            id: Uuid::new_v4(),
            title: "Test Filme".to_string(),
            rating: 5.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: Some(Utc::now()),
            deleted_at: None,
        }
    }

    #[test]
    fn test_entity_to_film_copies_all_fields() {
        let model = sample_model();
        let film: Film = model.clone().into();

        assert_eq!(film.id, model.id);
        assert_eq!(film.title, model.title);
        assert_eq!(film.rating, model.rating);
        assert_eq!(film.created_at, model.created_at);
        assert_eq!(film.updated_at, model.updated_at);
        assert_eq!(film.completed_at, model.completed_at);
        assert_eq!(film.deleted_at, model.deleted_at);
        assert!(film.owner_id.is_none());
    }

    #[test]
    fn test_round_trip_preserves_persisted_fields() {
        let mut model = sample_model();
        model.deleted_at = Some(Utc::now());

        let film: Film = model.clone().into();
        let active = to_active_model(&film, Some(&model));

        assert_eq!(active.id.clone().unwrap(), model.id);
        assert_eq!(active.title.clone().unwrap(), model.title);
        assert_eq!(active.rating.clone().unwrap(), model.rating);
        assert_eq!(active.created_at.clone().unwrap(), model.created_at);
        assert_eq!(active.updated_at.clone().unwrap(), model.updated_at);
        assert_eq!(active.completed_at.clone().unwrap(), model.completed_at);
        assert_eq!(active.deleted_at.clone().unwrap(), model.deleted_at);
    }

    #[test]
    fn test_merge_keeps_existing_tombstone() {
        let mut existing = sample_model();
        existing.deleted_at = Some(Utc::now());

        // Incoming record without a tombstone must not clear the stored one.
        let mut film: Film = existing.clone().into();
        film.deleted_at = None;
        film.title = "Renamed".to_string();

        let active = to_active_model(&film, Some(&existing));
        assert_eq!(active.deleted_at.clone().unwrap(), existing.deleted_at);
        assert_eq!(active.title.clone().unwrap(), "Renamed");
    }

    #[test]
    fn test_insert_sets_every_column() {
        let model = sample_model();
        let film: Film = model.clone().into();

        let active = to_active_model(&film, None);
        assert!(active.id.is_set());
        assert!(active.created_at.is_set());
        assert!(active.deleted_at.is_set());
    }
}
