//! HTTP serving subsystem.
//!
//! Two independent listeners with no shared state:
//! - `server.rs` runs the Axum application that mounts the movie resource
//!   router behind tracing and timeout middleware
//! - `bootstrap.rs` is a raw framework-free listener dispatching on exact
//!   (method, path) pairs

pub mod bootstrap;
pub mod server;

pub use server::ApiServer;
