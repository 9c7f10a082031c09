//! Wire models for inbound events and generated messages

use serde::{Deserialize, Deserializer, Serialize};

/// Identity of the institution this bus speaks for
///
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionProfile {
    pub name: String,
    pub bic: String,
    pub lei: String,
}

/// Transfer observed on chain (request body for POST /iso/pacs008)
///
/// Missing or `null` fields decode as empty strings. Nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainTransfer {
    #[serde(deserialize_with = "null_as_empty")]
    pub tx_hash: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub from_account: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub to_account: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub currency: String,
    /// Decimal amount, kept as text
    #[serde(deserialize_with = "null_as_empty")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub reference: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub occurred_at: String,
    #[serde(rename = "beneficiary_name", deserialize_with = "null_as_empty")]
    pub beneficiary: String,
    #[serde(rename = "originator_name", deserialize_with = "null_as_empty")]
    pub originator: String,
}

/// Simplified pacs.008 customer credit transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacs008Message {
    pub message_id: String,
    /// RFC 3339, nanosecond precision
    #[serde(rename = "creation_dt")]
    pub creation_date_time: String,
    pub inst_name: String,
    pub inst_bic: String,
    pub inst_lei: String,
    pub tx_reference: String,
    pub currency: String,
    pub amount: String,
    pub debtor_name: String,
    pub creditor_name: String,
    pub debtor_account: String,
    pub creditor_account: String,
}

/// Status report for a hold placed by an external system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldCallback {
    #[serde(deserialize_with = "null_as_empty")]
    pub hold_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
}

/// Decode a string field, reading JSON `null` as `""`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
