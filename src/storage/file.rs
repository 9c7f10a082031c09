//! Flat-file message store
//!
//! One JSON file per record, no index.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::StorageError;
use crate::traits::store::{MessageStore, RecordKind, StoredRecord};

/// Writes each record to its own file under a data directory
///
/// # File Naming
///
/// - `{data_dir}/pacs008_{unix_nanos}.json`
/// - `{data_dir}/holdcb_{unix_nanos}.json`
///
/// Stamps are strictly increasing within the process, so two records
/// never share a name even when the clock does not advance.
#[derive(Debug)]
pub struct FileStore {
    /// Directory holding every record
    data_dir: PathBuf,

    /// fsync each record before returning
    fsync: bool,

    /// Last stamp handed out
    last_stamp: AtomicU64,
}

impl FileStore {
    /// Open a store, creating the data directory (and parents) if needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CreateDir` if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>, fsync: bool) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        create_data_dir(&data_dir).map_err(|source| StorageError::CreateDir {
            path: data_dir.clone(),
            source,
        })?;

        Ok(Self {
            data_dir,
            fsync,
            last_stamp: AtomicU64::new(0),
        })
    }

    /// Data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path a record with this kind and stamp is written to
    pub fn record_path(&self, kind: RecordKind, stamp: u64) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}.json", kind.prefix(), stamp))
    }

    /// Next filename stamp: wall clock nanos, bumped past the previous stamp
    fn next_stamp(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);

        let mut prev = self.last_stamp.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self.last_stamp.compare_exchange_weak(
                prev,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

#[async_trait]
impl MessageStore for FileStore {
    async fn persist(
        &self,
        kind: RecordKind,
        document: &[u8],
    ) -> Result<StoredRecord, StorageError> {
        let stamp = self.next_stamp();
        let path = self.record_path(kind, stamp);

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                StorageError::AlreadyExists(path.clone())
            } else {
                StorageError::Io(e)
            }
        })?;

        file.write_all(document).await?;
        file.flush().await?;
        if self.fsync {
            file.sync_all().await?;
        }

        tracing::debug!(path = %path.display(), bytes = document.len(), "record written");

        Ok(StoredRecord { kind, path, stamp })
    }

    async fn list(&self, kind: RecordKind) -> Result<Vec<PathBuf>, StorageError> {
        let prefix = format!("{}_", kind.prefix());
        let mut found = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.data_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            // Parse {prefix}_{stamp}.json
            let stamp = name_str
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".json"))
                .and_then(|s| s.parse::<u64>().ok());
            if let Some(stamp) = stamp {
                found.push((stamp, entry.path()));
            }
        }

        found.sort_by_key(|(stamp, _)| *stamp);
        Ok(found.into_iter().map(|(_, path)| path).collect())
    }
}

#[cfg(unix)]
fn create_data_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
}

#[cfg(not(unix))]
fn create_data_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
