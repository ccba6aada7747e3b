//! Relay-facing types

use anchor_lang::prelude::Pubkey;
use gateway::events::BridgeStarted;
use serde::{Deserialize, Serialize};

/// A departure as the relay forwards it to the paired chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureRecord {
    #[serde(with = "pubkey_str")]
    pub depositor: Pubkey,
    /// Amount debited from the depositor
    pub amount: u64,
    /// Amount burned; the value to release on the destination chain
    pub net_amount: u64,
    /// Portion retained by the gateway
    pub fee: u64,
    pub destination_chain: String,
    pub destination_address: String,
}

impl From<&BridgeStarted> for DepartureRecord {
    fn from(event: &BridgeStarted) -> Self {
        Self {
            depositor: event.caller,
            amount: event.amount,
            net_amount: event.net_amount,
            fee: event.amount.saturating_sub(event.net_amount),
            destination_chain: event.destination_chain.clone(),
            destination_address: event.destination_address.clone(),
        }
    }
}

/// Serialize a `Pubkey` as its base58 string.
pub mod pubkey_str {
    use anchor_lang::prelude::Pubkey;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
