//! Table lock handlers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use tablelock_core::TableId;

use crate::error::ApiError;
use crate::registry::{AcquireOutcome, ReleaseOutcome};
use crate::schema::tables::{
    ListLocksResponse, LockTableRequest, LockTableResponse, TableStatusResponse,
    UnlockTableRequest, UnlockTableResponse,
};
use crate::state::AppState;

/// `POST /api/tables/lock`
pub async fn lock_table(
    State(state): State<AppState>,
    payload: Result<Json<LockTableRequest>, JsonRejection>,
) -> Result<Json<LockTableResponse>, ApiError> {
    let Json(req) = payload?;
    let cmd = req.validate()?;

    let outcome = state
        .registry
        .acquire(cmd.table_id, cmd.holder_id, cmd.duration);
    let message = outcome.message().to_string();

    match outcome {
        AcquireOutcome::Acquired(lock) => {
            tracing::info!(
                table = %lock.table_id,
                holder = %lock.holder_id,
                expires_at = %lock.expires_at,
                "table locked"
            );
            Ok(Json(LockTableResponse {
                success: true,
                message,
                lock,
            }))
        }
        AcquireOutcome::AlreadyLocked { .. } => Err(ApiError::Conflict(message)),
    }
}

/// `POST /api/tables/unlock`
///
/// Answers 200 for every registry outcome; a non-holder gets `success:false`.
pub async fn unlock_table(
    State(state): State<AppState>,
    payload: Result<Json<UnlockTableRequest>, JsonRejection>,
) -> Result<Json<UnlockTableResponse>, ApiError> {
    let Json(req) = payload?;
    let cmd = req.validate()?;

    let outcome = state.registry.release(&cmd.table_id, &cmd.holder_id);
    if outcome == ReleaseOutcome::Released {
        tracing::info!(table = %cmd.table_id, holder = %cmd.holder_id, "table unlocked");
    }

    Ok(Json(UnlockTableResponse {
        success: outcome.is_success(),
        message: outcome.message().to_string(),
    }))
}

/// `GET /api/tables/{resource_id}/status`
pub async fn table_status(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TableStatusResponse>, ApiError> {
    let Path(raw) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let table_id = TableId::new(raw)?;

    Ok(Json(TableStatusResponse {
        is_locked: state.registry.is_locked(&table_id),
    }))
}

/// `GET /api/tables/locks`
pub async fn list_locks(State(state): State<AppState>) -> Json<ListLocksResponse> {
    Json(ListLocksResponse {
        locks: state.registry.snapshot(),
    })
}
