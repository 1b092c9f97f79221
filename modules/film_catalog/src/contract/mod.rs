//! Contract layer - public API of the film catalog
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::FilmCatalogApi;
pub use error::FilmError;
pub use model::{Film, FilmPatch, NewFilm};
