//! HTTP/JSON API server for expiring, exclusive table locks.
//!
//! The [`registry`] module holds all lock state and the expiry sweep. The
//! remaining modules are the axum transport around it: router, handlers,
//! schema types, error mapping, configuration and process lifecycle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod schema;
pub mod server;
pub mod state;
