//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Film response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable title
    #[schema(example = "Cidade de Deus")]
    pub title: String,

    /// Score in the 0.0..=10.0 range
    #[schema(example = 8.6)]
    pub rating: f64,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last mutation timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,

    /// When the film was finished watching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Owning user account; reserved, currently always absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}

/// Create film request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFilmRequest {
    /// Title of the film to track
    #[schema(example = "Cidade de Deus")]
    pub title: String,

    /// Initial score
    #[serde(default)]
    pub rating: f64,

    /// Set when the film has already been watched
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Partial film update request
///
/// Omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateFilmRequest {
    /// New title
    pub title: Option<String>,

    /// New score
    pub rating: Option<f64>,

    /// Mark the film as finished at this instant
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// List of films
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilmsListResponse {
    /// List of films
    pub items: Vec<FilmDto>,

    /// Total count
    pub total: usize,
}

// Note: Conversion implementations live in mapper.rs per module guidelines
