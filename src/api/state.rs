//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::StoragePolicy;
use crate::iso::InstitutionProfile;
use crate::traits::MessageStore;

/// Application state shared across handlers
///
/// Built once at startup; nothing in here is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Identity stamped onto every pacs.008 message
    pub institution: InstitutionProfile,

    /// Record store for messages and callbacks
    pub store: Arc<dyn MessageStore>,

    /// What a failed write means for the response
    pub storage_policy: StoragePolicy,
}
