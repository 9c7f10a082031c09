//! Hold callback handler

use std::sync::Arc;

use axum::{body::Bytes, extract::State};

use crate::api::handlers::persist_record;
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::iso::HoldCallback;
use crate::traits::RecordKind;

/// POST /callbacks/hold - Record a hold status report
pub async fn ingest_hold_callback(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<&'static str, ServerError> {
    let callback: HoldCallback =
        serde_json::from_slice(&body).map_err(|_| ServerError::InvalidCallback)?;

    let document = serde_json::to_vec_pretty(&callback)
        .map_err(|e| ServerError::Internal(format!("encode hold callback: {}", e)))?;

    persist_record(&state, RecordKind::HoldCallback, &document).await?;

    tracing::info!(hold_id = %callback.hold_id, status = %callback.status, "hold callback received");

    Ok("ok")
}
