//! Exclusive, expiring table locks keyed by [`TableId`].
//!
//! [`LockRegistry`] keeps at most one record per table in a `DashMap`. Each
//! check-then-write (acquire, release, lazy expiry on lookup) runs inside a
//! single `entry()` call so it holds the owning shard's lock for the whole
//! step. Tables hashed to different shards never contend.
//!
//! Dead records are removed two ways: lazily whenever a lookup touches them,
//! and by a periodic sweep for tables nobody looks at again.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use tablelock_core::{HolderId, LockDuration, TableId};

use super::record::LockRecord;

/// Result of an acquire attempt.
#[derive(Debug, Clone)]
pub enum AcquireOutcome {
    /// The caller now holds the lock.
    Acquired(LockRecord),
    /// A live lock already exists; the caller's identity does not matter.
    AlreadyLocked { expires_at: DateTime<Utc> },
}

/// Result of a release attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The caller's lock was removed.
    Released,
    /// No live lock existed. Any dead record found was reclaimed.
    NothingToRelease,
    /// A live lock exists but belongs to someone else. Left untouched.
    Unauthorized,
}

impl AcquireOutcome {
    pub fn is_acquired(&self) -> bool {
        matches!(self, AcquireOutcome::Acquired(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            AcquireOutcome::Acquired(_) => "Table locked successfully.",
            AcquireOutcome::AlreadyLocked { .. } => "Table is currently locked by another user.",
        }
    }
}

impl ReleaseOutcome {
    /// Whether the caller should see the release as successful.
    pub fn is_success(&self) -> bool {
        !matches!(self, ReleaseOutcome::Unauthorized)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ReleaseOutcome::Released => "Table unlocked successfully.",
            ReleaseOutcome::NothingToRelease => "No lock found for this table.",
            ReleaseOutcome::Unauthorized => {
                "Unauthorized: You cannot unlock a table locked by another user."
            }
        }
    }
}

/// Registry of table locks with TTL-based expiry.
#[derive(Default)]
pub struct LockRegistry {
    locks: DashMap<TableId, LockRecord>,
}

impl LockRegistry {
    pub fn new() -> Self {
        LockRegistry {
            locks: DashMap::new(),
        }
    }

    /// Grants `holder_id` an exclusive lock on `table_id` for `duration`,
    /// unless a live lock already exists. A dead record is overwritten.
    pub fn acquire(
        &self,
        table_id: TableId,
        holder_id: HolderId,
        duration: LockDuration,
    ) -> AcquireOutcome {
        let now = Instant::now();

        match self.locks.entry(table_id) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get();
                if current.is_live_at(now) {
                    tracing::debug!(
                        table = %current.table_id,
                        holder = %current.holder_id,
                        requested_by = %holder_id,
                        remaining_ms = current.remaining(now).as_millis() as u64,
                        "lock request declined"
                    );
                    return AcquireOutcome::AlreadyLocked {
                        expires_at: current.expires_at,
                    };
                }
                let record = LockRecord::new(occupied.key().clone(), holder_id, duration);
                occupied.insert(record.clone());
                AcquireOutcome::Acquired(record)
            }
            Entry::Vacant(vacant) => {
                let record = LockRecord::new(vacant.key().clone(), holder_id, duration);
                vacant.insert(record.clone());
                AcquireOutcome::Acquired(record)
            }
        }
    }

    /// Removes the lock on `table_id` if `holder_id` owns it.
    ///
    /// A dead record is reclaimed and reported as [`ReleaseOutcome::NothingToRelease`]
    /// whoever asks, so an expired holder identity never blocks cleanup.
    pub fn release(&self, table_id: &TableId, holder_id: &HolderId) -> ReleaseOutcome {
        let now = Instant::now();

        match self.locks.entry(table_id.clone()) {
            Entry::Vacant(_) => ReleaseOutcome::NothingToRelease,
            Entry::Occupied(occupied) if occupied.get().is_expired_at(now) => {
                occupied.remove();
                tracing::debug!(table = %table_id, "reclaimed expired lock on release");
                ReleaseOutcome::NothingToRelease
            }
            Entry::Occupied(occupied) if occupied.get().holder_id == *holder_id => {
                occupied.remove();
                ReleaseOutcome::Released
            }
            Entry::Occupied(occupied) => {
                tracing::debug!(
                    table = %table_id,
                    holder = %occupied.get().holder_id,
                    requested_by = %holder_id,
                    "unlock request declined"
                );
                ReleaseOutcome::Unauthorized
            }
        }
    }

    /// Whether `table_id` currently has a live lock.
    pub fn is_locked(&self, table_id: &TableId) -> bool {
        self.lock_details(table_id).is_some()
    }

    /// Returns the live lock on `table_id`, reclaiming a dead record first.
    pub fn lock_details(&self, table_id: &TableId) -> Option<LockRecord> {
        let now = Instant::now();

        match self.locks.entry(table_id.clone()) {
            Entry::Vacant(_) => None,
            Entry::Occupied(occupied) if occupied.get().is_expired_at(now) => {
                occupied.remove();
                tracing::debug!(table = %table_id, "reclaimed expired lock on lookup");
                None
            }
            Entry::Occupied(occupied) => Some(occupied.get().clone()),
        }
    }

    /// All live locks, ordered by table id. Dead records are skipped but not
    /// removed; that is the sweep's job.
    pub fn snapshot(&self) -> Vec<LockRecord> {
        let now = Instant::now();
        let mut live: Vec<LockRecord> = self
            .locks
            .iter()
            .filter(|entry| entry.value().is_live_at(now))
            .map(|entry| entry.value().clone())
            .collect();
        live.sort_by(|a, b| a.table_id.cmp(&b.table_id));
        live
    }

    /// Number of stored records, including dead ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Removes every dead record and returns the reclaimed table ids.
    pub fn sweep_expired(&self) -> Vec<TableId> {
        let now = Instant::now();
        let mut reclaimed = Vec::new();

        self.locks.retain(|table_id, record| {
            if record.is_expired_at(now) {
                reclaimed.push(table_id.clone());
                false
            } else {
                true
            }
        });

        reclaimed.sort();
        reclaimed
    }

    /// Spawns a background tokio task that sweeps dead records every
    /// `interval`. The caller owns the handle and aborts it on shutdown.
    pub fn start_expiry_sweep(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tick.tick().await;
                let reclaimed = registry.sweep_expired();
                if !reclaimed.is_empty() {
                    tracing::info!(
                        "Swept {} expired lock(s): {:?}",
                        reclaimed.len(),
                        reclaimed.iter().map(TableId::as_str).collect::<Vec<_>>()
                    );
                }
            }
        })
    }
}
