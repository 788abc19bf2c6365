//! HTTP handler modules for the tablelock API.
//!
//! Handlers parse and validate requests, call into the shared
//! [`LockRegistry`](crate::registry::LockRegistry), and shape JSON
//! responses. No lock logic lives here.

pub mod health;
pub mod tables;
