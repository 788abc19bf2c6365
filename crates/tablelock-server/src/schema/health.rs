//! Schema types for the health endpoint.

use serde::Serialize;

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    /// Records currently held by the registry, including dead ones the
    /// sweep has not reached yet.
    pub stored_locks: usize,
}
