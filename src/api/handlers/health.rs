//! Liveness probe

/// GET /healthz - always 200 "ok"
///
/// Does not look at storage or config.
pub async fn healthz() -> &'static str {
    "ok"
}
