pub mod duration;
pub mod error;
pub mod id;

// Re-export commonly used types
pub use duration::{LockDuration, MAX_LOCK_SECONDS};
pub use error::ValidationError;
pub use id::{HolderId, TableId};
