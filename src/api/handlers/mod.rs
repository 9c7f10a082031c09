//! HTTP request handlers

mod health;
mod hold;
mod pacs008;

pub use health::healthz;
pub use hold::ingest_hold_callback;
pub use pacs008::ingest_transfer;

use crate::api::state::AppState;
use crate::error::{ServerError, ServerResult};
use crate::traits::RecordKind;

/// Fallback for ingest routes hit with anything but POST
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

/// Persist a document and apply the configured failure policy
///
/// Lenient policy: a failed write is logged and the request still succeeds.
/// Strict policy: a failed write becomes a 500.
async fn persist_record(state: &AppState, kind: RecordKind, document: &[u8]) -> ServerResult<()> {
    match state.store.persist(kind, document).await {
        Ok(record) => {
            tracing::debug!(kind = kind.prefix(), path = %record.path.display(), "record stored");
            Ok(())
        }
        Err(e) if state.storage_policy.strict => {
            tracing::error!(kind = kind.prefix(), error = %e, "failed to persist record");
            Err(ServerError::Storage(e))
        }
        Err(e) => {
            tracing::warn!(kind = kind.prefix(), error = %e, "failed to persist record, responding anyway");
            Ok(())
        }
    }
}
