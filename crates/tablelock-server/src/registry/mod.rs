//! In-memory lock registry.
//!
//! - [`lock_registry::LockRegistry`] owns every table lock and decides
//!   acquire/release/query outcomes
//! - [`record::LockRecord`] is the stored lock with its expiry

pub mod lock_registry;
pub mod record;

pub use lock_registry::{AcquireOutcome, LockRegistry, ReleaseOutcome};
pub use record::LockRecord;
