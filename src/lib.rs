//! Movie Catalog HTTP Service Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod movies;
pub mod observability;

pub use config::AppConfig;
pub use http::ApiServer;
pub use lifecycle::Shutdown;
pub use movies::MovieStore;
