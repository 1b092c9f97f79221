//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{EventPublisher, FilmEvent, NoOpEventPublisher};
pub use repository::FilmRepository;
pub use service::Service;
