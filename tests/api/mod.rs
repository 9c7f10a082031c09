//! API integration tests
//!
//! Tests for HTTP endpoints:
//! - GET /healthz
//! - POST /iso/pacs008
//! - POST /callbacks/hold

pub mod pacs008_test;
