//! The movie record and seed data.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single movie entry.
///
/// `genre` elements and `year` are kept as raw JSON values: the write schema
/// only checks that `genre` is an array and `year` is a number, and integer
/// years must round-trip without becoming floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub name: String,
    pub genre: Vec<Value>,
    pub year: Number,
}

/// The four records every fresh process starts with.
pub fn seed_movies() -> Vec<Movie> {
    (1..=4)
        .map(|id| Movie {
            id,
            name: if id == 1 {
                "Inception".to_string()
            } else {
                format!("Inception {}", id)
            },
            genre: vec![Value::from("sci-fi"), Value::from("thriller")],
            year: Number::from(2015),
        })
        .collect()
}
