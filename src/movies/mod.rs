//! Movie resource subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → handlers.rs (extract path id / JSON body)
//!     → validation.rs (schema check, first violation wins)
//!     → store.rs (scan / splice the in-memory collection)
//!     → JSON or plain-text response
//! ```
//!
//! # Design Decisions
//! - The collection lives entirely in memory and is reseeded at startup
//! - Identifiers come from a monotonic counter and are never reused, so
//!   deletions cannot cause id collisions
//! - Response payloads are deliberately mixed: records and not-found errors
//!   are JSON, delete confirmations and validation failures are plain text

pub mod handlers;
pub mod record;
pub mod store;
pub mod validation;

pub use handlers::router;
pub use record::Movie;
pub use store::{MovieStore, StoreError};
