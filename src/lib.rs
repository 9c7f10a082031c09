//! iso-bus library exports (for testing)

pub mod api;
pub mod config;
pub mod error;
pub mod iso;
pub mod storage;
pub mod traits;

// Re-exports
pub use error::{ServerError, ServerResult, StorageError};
pub use storage::FileStore;
pub use traits::{MessageStore, RecordKind};
