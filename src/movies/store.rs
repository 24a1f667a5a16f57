//! In-memory movie collection.
//!
//! # Responsibilities
//! - Hold the ordered sequence of movie records
//! - Assign identifiers from a monotonic counter
//! - Perform the linear scans and splices behind the CRUD handlers
//!
//! # Design Decisions
//! - Identifiers are never reused after a deletion; the counter only moves
//!   forward, even when the collection shrinks
//! - The lock is held for the duration of one scan or splice only; no await
//!   point is crossed while it is held

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::RwLock;

use crate::movies::record::{self, Movie};
use crate::movies::validation::MovieDraft;

/// Errors that can occur against the collection.
///
/// The Display output of [`StoreError::NotFound`] is the exact message
/// clients see in 404 bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("The movie you are looking for is not there!")]
    NotFound,
}

/// The shared in-memory collection of movies.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
    next_id: AtomicU64,
}

impl MovieStore {
    /// Create a store holding the given records.
    ///
    /// The id counter starts past the highest existing id.
    pub fn new(movies: Vec<Movie>) -> Self {
        let next_id = movies.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            movies: RwLock::new(movies),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Create a store with the standard four seed records.
    pub fn with_seed() -> Self {
        Self::new(record::seed_movies())
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Snapshot of the full collection, in insertion order.
    pub async fn list(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Find a movie by id.
    pub async fn get(&self, id: u64) -> Result<Movie, StoreError> {
        self.movies
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// True if a movie with this id exists.
    pub async fn contains(&self, id: u64) -> bool {
        self.movies.read().await.iter().any(|m| m.id == id)
    }

    /// Append a new movie, assigning it the next free id.
    pub async fn create(&self, draft: MovieDraft) -> Movie {
        let movie = Movie {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: draft.name,
            genre: draft.genre,
            year: draft.year,
        };
        self.movies.write().await.push(movie.clone());
        movie
    }

    /// Overwrite name/genre/year of an existing movie in place.
    ///
    /// The id and the record's position in the collection are preserved.
    pub async fn update(&self, id: u64, draft: MovieDraft) -> Result<Movie, StoreError> {
        let mut movies = self.movies.write().await;
        let movie = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;

        movie.name = draft.name;
        movie.genre = draft.genre;
        movie.year = draft.year;
        Ok(movie.clone())
    }

    /// Remove exactly one movie by id.
    pub async fn remove(&self, id: u64) -> Result<(), StoreError> {
        let mut movies = self.movies.write().await;
        let index = movies
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        movies.remove(index);
        Ok(())
    }
}
