//! Common test utilities and the in-memory repository double

use async_trait::async_trait;
use chrono::Utc;
use film_catalog::contract::Film;
use film_catalog::domain::FilmRepository;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory film repository that counts persistence writes
///
/// `save_count` stands in for mock-framework call verification: tests assert
/// the exact number of writes an operation is allowed to issue.
#[derive(Clone, Default)]
pub struct MockFilmRepo {
    films: Arc<RwLock<HashMap<Uuid, Film>>>,
    saves: Arc<RwLock<usize>>,
}

impl MockFilmRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing the service
    pub fn insert(&self, film: Film) {
        self.films.write().insert(film.id, film);
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        *self.saves.read()
    }

    /// Read a record straight from storage, tombstoned or not
    #[allow(dead_code)]
    pub fn stored(&self, id: Uuid) -> Option<Film> {
        self.films.read().get(&id).cloned()
    }

    /// Count of records without a tombstone
    #[allow(dead_code)]
    pub fn count_active(&self) -> usize {
        self.films
            .read()
            .values()
            .filter(|f| f.deleted_at.is_none())
            .count()
    }

    /// Print verbose information about repository state
    #[allow(dead_code)]
    pub fn print_state(&self, context: &str) {
        let films = self.films.read();
        println!("\n========== FilmRepository State: {} ==========", context);
        println!("Total films: {} ({} saves so far)", films.len(), self.save_count());

        if films.is_empty() {
            println!("  (empty)");
        } else {
            for film in films.values() {
                println!(
                    "  {} | {:<30} | rating {:>4} | deleted: {:?}",
                    film.id, film.title, film.rating, film.deleted_at
                );
            }
        }
        println!("====================================================\n");
    }
}

#[async_trait]
impl FilmRepository for MockFilmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Film>> {
        Ok(self.films.read().get(&id).cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Film>> {
        let mut films: Vec<Film> = self.films.read().values().cloned().collect();
        films.sort_by_key(|f| f.created_at);
        Ok(films)
    }

    async fn save(&self, film: &Film) -> anyhow::Result<Film> {
        *self.saves.write() += 1;
        self.films.write().insert(film.id, film.clone());
        Ok(film.clone())
    }
}

/// Build a film fixture the way the service would have created it
pub fn sample_film(title: &str, rating: f64) -> Film {
    let now = Utc::now();
    Film {
        id: Uuid::new_v4(),
        title: title.to_string(),
        rating,
        created_at: now,
        updated_at: now,
        completed_at: None,
        deleted_at: None,
        owner_id: None,
    }
}
