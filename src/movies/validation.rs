//! Write-payload validation.
//!
//! # Responsibilities
//! - Check `name`, `year`, `genre` against the shared write schema
//! - Report the FIRST violation only, in schema declaration order
//! - Leave `genre` element types unchecked
//!
//! # Design Decisions
//! - Payloads are validated as raw JSON values rather than deserialized into
//!   a typed struct, so a wrong-typed field produces the schema's own
//!   message instead of a deserializer error

use serde_json::{Number, Value};
use thiserror::Error;

/// Minimum accepted `name` length.
const NAME_MIN_LEN: usize = 4;

/// A validated movie payload, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub name: String,
    pub genre: Vec<Value>,
    pub year: Number,
}

/// The first schema violation found in a write payload.
///
/// Display output is the exact plain-text message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"{0}\" is required")]
    Required(&'static str),
    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),
    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },
    #[error("\"{0}\" must be a number")]
    NotANumber(&'static str),
    #[error("\"{0}\" must be an array")]
    NotAnArray(&'static str),
}

/// Validate a write payload against the shared movie schema.
///
/// Fields are checked in declaration order (name, year, genre); the first
/// violation wins. Extra fields are ignored.
pub fn validate_movie(body: &Value) -> Result<MovieDraft, ValidationError> {
    let name = match body.get("name") {
        None => return Err(ValidationError::Required("name")),
        Some(Value::String(s)) => {
            if s.chars().count() < NAME_MIN_LEN {
                return Err(ValidationError::TooShort {
                    field: "name",
                    min: NAME_MIN_LEN,
                });
            }
            s.clone()
        }
        Some(_) => return Err(ValidationError::NotAString("name")),
    };

    let year = match body.get("year") {
        None => return Err(ValidationError::Required("year")),
        Some(Value::Number(n)) => n.clone(),
        Some(_) => return Err(ValidationError::NotANumber("year")),
    };

    let genre = match body.get("genre") {
        None => return Err(ValidationError::Required("genre")),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => return Err(ValidationError::NotAnArray("genre")),
    };

    Ok(MovieDraft { name, genre, year })
}
