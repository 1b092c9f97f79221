//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Filmes table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "filmes")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Human-readable title
    pub title: String,

    /// Score in the 0.0..=10.0 range
    pub rating: f64,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last mutation timestamp
    pub updated_at: DateTimeUtc,

    /// When the film was finished watching
    pub completed_at: Option<DateTimeUtc>,

    /// Soft delete timestamp
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
