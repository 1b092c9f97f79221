//! SeaORM repository implementations

use crate::contract::Film;
use crate::domain::repository::FilmRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::{entity, mapper};

/// Film repository backed by SeaORM
pub struct SeaOrmFilmRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFilmRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FilmRepository for SeaOrmFilmRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Film>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_all(&self) -> Result<Vec<Film>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn save(&self, film: &Film) -> Result<Film> {
        // Insert-or-update keyed on id
        let existing = entity::Entity::find_by_id(film.id).one(&*self.db).await?;

        let result = if let Some(existing) = existing {
            let active = mapper::to_active_model(film, Some(&existing));
            entity::Entity::update(active).exec(&*self.db).await?
        } else {
            let active = mapper::to_active_model(film, None);
            entity::Entity::insert(active)
                .exec_with_returning(&*self.db)
                .await?
        };

        Ok(result.into())
    }
}
