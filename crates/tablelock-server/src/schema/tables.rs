//! Schema types for the table lock API.
//!
//! Request fields are deserialized as raw JSON values and checked by
//! `validate()`, so a wrong type yields a field-specific 400 instead of a
//! generic extractor rejection. The original field names `tableId` and
//! `userId` are accepted as aliases.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tablelock_core::{HolderId, LockDuration, TableId, ValidationError};

use crate::registry::LockRecord;

/// Body of `POST /api/tables/lock`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockTableRequest {
    #[serde(alias = "tableId")]
    pub resource_id: Option<Value>,
    #[serde(alias = "userId")]
    pub holder_id: Option<Value>,
    /// Lock lifetime in seconds.
    pub duration: Option<Value>,
}

/// A lock request that passed validation.
#[derive(Debug, Clone)]
pub struct LockCommand {
    pub table_id: TableId,
    pub holder_id: HolderId,
    pub duration: LockDuration,
}

impl LockTableRequest {
    /// Checks fields in order: resource, holder, duration.
    pub fn validate(&self) -> Result<LockCommand, ValidationError> {
        Ok(LockCommand {
            table_id: TableId::from_json(self.resource_id.as_ref())?,
            holder_id: HolderId::from_json(self.holder_id.as_ref())?,
            duration: LockDuration::from_json(self.duration.as_ref())?,
        })
    }
}

/// Body of `POST /api/tables/unlock`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockTableRequest {
    #[serde(alias = "tableId")]
    pub resource_id: Option<Value>,
    #[serde(alias = "userId")]
    pub holder_id: Option<Value>,
}

/// An unlock request that passed validation.
#[derive(Debug, Clone)]
pub struct UnlockCommand {
    pub table_id: TableId,
    pub holder_id: HolderId,
}

impl UnlockTableRequest {
    pub fn validate(&self) -> Result<UnlockCommand, ValidationError> {
        Ok(UnlockCommand {
            table_id: TableId::from_json(self.resource_id.as_ref())?,
            holder_id: HolderId::from_json(self.holder_id.as_ref())?,
        })
    }
}

/// Response of a successful lock.
#[derive(Debug, Clone, Serialize)]
pub struct LockTableResponse {
    pub success: bool,
    pub message: String,
    pub lock: LockRecord,
}

/// Response of an unlock attempt. `success` is false only when someone
/// other than the holder asked.
#[derive(Debug, Clone, Serialize)]
pub struct UnlockTableResponse {
    pub success: bool,
    pub message: String,
}

/// Response of `GET /api/tables/{resourceId}/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStatusResponse {
    pub is_locked: bool,
}

/// Response of `GET /api/tables/locks`.
#[derive(Debug, Clone, Serialize)]
pub struct ListLocksResponse {
    pub locks: Vec<LockRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_original_field_names() {
        let req: LockTableRequest =
            serde_json::from_value(json!({ "tableId": "T1", "userId": "alice", "duration": 5 }))
                .unwrap();
        let cmd = req.validate().unwrap();
        assert_eq!(cmd.table_id.as_str(), "T1");
        assert_eq!(cmd.holder_id.as_str(), "alice");
        assert_eq!(cmd.duration.as_secs_f64(), 5.0);
    }

    #[test]
    fn reports_first_invalid_field() {
        let req: LockTableRequest =
            serde_json::from_value(json!({ "resourceId": 7, "duration": -1 })).unwrap();
        assert_eq!(req.validate().unwrap_err(), ValidationError::InvalidTableId);

        let req: LockTableRequest =
            serde_json::from_value(json!({ "resourceId": "T1", "holderId": "a" })).unwrap();
        assert_eq!(req.validate().unwrap_err(), ValidationError::InvalidDuration);
    }

    #[test]
    fn unlock_requires_holder() {
        let req: UnlockTableRequest =
            serde_json::from_value(json!({ "resourceId": "T1", "holderId": "" })).unwrap();
        assert_eq!(req.validate().unwrap_err(), ValidationError::InvalidHolderId);
    }

    #[test]
    fn status_uses_camel_case() {
        let body = serde_json::to_value(TableStatusResponse { is_locked: true }).unwrap();
        assert_eq!(body, json!({ "isLocked": true }));
    }
}
