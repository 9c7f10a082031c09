//! ISO 20022 projection of chain transfers

pub mod models;
pub mod pacs008;

pub use models::{ChainTransfer, HoldCallback, InstitutionProfile, Pacs008Message};
pub use pacs008::{message_id, translate, translate_now};
