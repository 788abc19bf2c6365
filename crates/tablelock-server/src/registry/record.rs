//! The stored form of a single lock.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;

use tablelock_core::{HolderId, LockDuration, TableId};

/// Exclusive, time-bounded claim on one table.
///
/// Liveness is decided by the monotonic `deadline`; the wall-clock
/// timestamps are carried for reporting only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRecord {
    #[serde(rename = "resourceId")]
    pub table_id: TableId,
    pub holder_id: HolderId,
    pub acquired_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(skip)]
    deadline: Instant,
}

impl LockRecord {
    pub(crate) fn new(table_id: TableId, holder_id: HolderId, duration: LockDuration) -> Self {
        let ttl = duration.as_duration();
        let acquired_at = Utc::now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|d| acquired_at.checked_add_signed(d))
            .unwrap_or(acquired_at);
        LockRecord {
            table_id,
            holder_id,
            acquired_at,
            expires_at,
            deadline: Instant::now() + ttl,
        }
    }

    /// A lock is live strictly before its deadline.
    pub fn is_live_at(&self, now: Instant) -> bool {
        now < self.deadline
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.is_live_at(now)
    }

    pub fn remaining(&self, now: Instant) -> std::time::Duration {
        self.deadline.saturating_duration_since(now)
    }
}
