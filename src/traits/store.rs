//! Async message store trait definition

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::StorageError;

/// Kind of record being persisted
///
/// The kind decides the filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Translated pacs.008 message
    Pacs008,
    /// Hold status callback
    HoldCallback,
}

impl RecordKind {
    /// Filename prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            RecordKind::Pacs008 => "pacs008",
            RecordKind::HoldCallback => "holdcb",
        }
    }
}

/// Location of a record after a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub kind: RecordKind,
    pub path: PathBuf,
    /// Unix nanoseconds used in the filename
    pub stamp: u64,
}

/// Append-only record store
///
/// Records are never updated or deleted through this trait.
#[async_trait]
pub trait MessageStore: Send + Sync + 'static {
    /// Write one already-encoded document as a new record
    ///
    /// # Errors
    /// * `StorageError::AlreadyExists` - target name taken by another writer
    /// * `StorageError::Io` - disk write failure
    async fn persist(&self, kind: RecordKind, document: &[u8])
        -> Result<StoredRecord, StorageError>;

    /// List stored records of one kind, oldest first
    ///
    /// Ordered by the numeric stamp in the filename, not by the name
    /// string, so stamps of different digit counts still sort correctly.
    async fn list(&self, kind: RecordKind) -> Result<Vec<PathBuf>, StorageError>;
}
