//! Storage module
//!
//! Flat-file persistence for pacs.008 messages and hold callbacks.

pub mod file;

pub use crate::traits::MessageStore;
pub use file::FileStore;
