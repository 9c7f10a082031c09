//! Server error types

use std::path::PathBuf;

use axum::http::StatusCode;
use thiserror::Error;

/// Main server error type
#[derive(Debug, Error)]
pub enum ServerError {
    // ========== Request Errors ==========
    /// Transfer body could not be decoded
    #[error("bad json: {0}")]
    InvalidJson(String),

    /// Hold callback body could not be decoded (detail is not echoed back)
    #[error("bad json")]
    InvalidCallback,

    /// Route exists but the method is not accepted
    #[error("method not allowed")]
    MethodNotAllowed,

    // ========== Storage Errors ==========
    /// Persisting a record failed
    #[error("storage error: {0}")]
    Storage(StorageError),

    // ========== Server Errors ==========
    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Message store errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Data directory could not be created
    #[error("cannot create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target file already exists (another writer used the same stamp)
    #[error("record already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Record could not be encoded
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No supported format accepted the file
    #[error("parse config: {0}")]
    Parse(String),

    /// Listen address is not usable
    #[error("invalid listen address {0:?}")]
    InvalidAddr(String),
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServerError::InvalidJson(_) | ServerError::InvalidCallback => StatusCode::BAD_REQUEST,

            // 405 Method Not Allowed
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            ServerError::Storage(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::InvalidJson(_) | ServerError::InvalidCallback => "INVALID_JSON",
            ServerError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ServerError::Storage(_) => "STORAGE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if error is recoverable (client can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ServerError::Storage(StorageError::AlreadyExists(_))
                | ServerError::Storage(StorageError::Io(_))
        )
    }
}

impl From<StorageError> for ServerError {
    fn from(e: StorageError) -> Self {
        ServerError::Storage(e)
    }
}
