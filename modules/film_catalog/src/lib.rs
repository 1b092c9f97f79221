//! Film Catalog Module
//!
//! Watched/unwatched film tracking for Cine List. Films are created with a
//! title and a rating, partially updated, and soft-deleted: a tombstone
//! timestamp marks deletion and deleted records never surface through reads.

// Public exports
pub mod contract;
pub use contract::{client::FilmCatalogApi, error::FilmError, Film, FilmPatch, NewFilm};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
