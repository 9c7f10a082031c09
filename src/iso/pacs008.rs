//! Chain transfer → pacs.008 translation

use chrono::{DateTime, SecondsFormat, Utc};

use super::models::{ChainTransfer, InstitutionProfile, Pacs008Message};

/// Prefix of every generated message identifier
pub const MESSAGE_ID_PREFIX: &str = "MSG-";

/// Build a message identifier: `MSG-YYYYMMDDTHHMMSS.mmmZ`
pub fn message_id(now: DateTime<Utc>) -> String {
    format!("{}{}", MESSAGE_ID_PREFIX, now.format("%Y%m%dT%H%M%S%.3fZ"))
}

/// Translate a chain transfer into a pacs.008 message
///
/// Pure field mapping. Institution fields come from `profile`, the
/// originator is the debtor and the beneficiary is the creditor.
/// Currency and amount are copied as-is.
pub fn translate(
    event: &ChainTransfer,
    profile: &InstitutionProfile,
    now: DateTime<Utc>,
) -> Pacs008Message {
    Pacs008Message {
        message_id: message_id(now),
        creation_date_time: now.to_rfc3339_opts(SecondsFormat::Nanos, true),
        inst_name: profile.name.clone(),
        inst_bic: profile.bic.clone(),
        inst_lei: profile.lei.clone(),
        tx_reference: event.reference.clone(),
        currency: event.currency.clone(),
        amount: event.amount.clone(),
        debtor_name: event.originator.clone(),
        creditor_name: event.beneficiary.clone(),
        debtor_account: event.from_account.clone(),
        creditor_account: event.to_account.clone(),
    }
}

/// [`translate`] stamped with the current time
pub fn translate_now(event: &ChainTransfer, profile: &InstitutionProfile) -> Pacs008Message {
    translate(event, profile, Utc::now())
}
