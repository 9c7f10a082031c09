//! Transfer ingest handler

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::api::handlers::persist_record;
use crate::api::state::AppState;
use crate::error::ServerError;
use crate::iso::{translate_now, ChainTransfer};
use crate::traits::RecordKind;

/// POST /iso/pacs008 - Translate a chain transfer into pacs.008
///
/// The stored file and the response body are the same indented JSON.
pub async fn ingest_transfer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ServerError> {
    let event: ChainTransfer =
        serde_json::from_slice(&body).map_err(|e| ServerError::InvalidJson(e.to_string()))?;

    let message = translate_now(&event, &state.institution);
    let document = serde_json::to_vec_pretty(&message)
        .map_err(|e| ServerError::Internal(format!("encode pacs.008: {}", e)))?;

    persist_record(&state, RecordKind::Pacs008, &document).await?;

    tracing::info!(
        message_id = %message.message_id,
        tx_hash = %event.tx_hash,
        "pacs.008 generated"
    );

    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}
