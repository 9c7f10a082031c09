//! Trait definitions for record storage

pub mod store;

pub use store::{MessageStore, RecordKind, StoredRecord};
