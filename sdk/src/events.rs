//! Event decoding from transaction logs
//!
//! Anchor events are logged as `Program data: <base64>` where the payload is
//! the event discriminator followed by the borsh-encoded fields.

use anchor_lang::{AnchorDeserialize, Discriminator};
use base64::Engine;
use gateway::events::*;
use governance::events::*;
use ledger::events::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::DepartureRecord;

const PROGRAM_DATA: &str = "Program data: ";

/// Every event emitted by the bridge programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    BridgeDeployed(BridgeDeployed),
    TokensMinted(TokensMinted),
    TokensBurned(TokensBurned),
    Transferred(Transferred),
    Approved(Approved),
    BridgeStarted(BridgeStarted),
    AssetMinted(AssetMinted),
    FeesWithdrawn(FeesWithdrawn),
    RelayRotated(RelayRotated),
    TransferFeeUpdated(TransferFeeUpdated),
    OperationFeeUpdated(OperationFeeUpdated),
    PauseChanged(PauseChanged),
    OwnershipOffered(OwnershipOffered),
    OwnershipTransferred(OwnershipTransferred),
    ProxyBound(ProxyBound),
    ProxyOwnershipOffered(ProxyOwnershipOffered),
    ProxyOwnershipTransferred(ProxyOwnershipTransferred),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("event payload is shorter than a discriminator")]
    Truncated,

    #[error("malformed {name} payload: {source}")]
    Malformed {
        name: &'static str,
        source: std::io::Error,
    },
}

macro_rules! decode_as {
    ($data:expr, $($event:ident),+ $(,)?) => {
        $(
            if let Some(payload) = $data.strip_prefix(<$event as Discriminator>::DISCRIMINATOR) {
                let event = $event::try_from_slice(payload).map_err(|source| {
                    DecodeError::Malformed {
                        name: stringify!($event),
                        source,
                    }
                })?;
                return Ok(Some(BridgeEvent::$event(event)));
            }
        )+
    };
}

/// Decode one raw event payload. Unknown discriminators yield `None`.
pub fn decode_event(data: &[u8]) -> Result<Option<BridgeEvent>, DecodeError> {
    if data.len() < 8 {
        return Err(DecodeError::Truncated);
    }

    decode_as!(
        data,
        BridgeDeployed,
        TokensMinted,
        TokensBurned,
        Transferred,
        Approved,
        BridgeStarted,
        AssetMinted,
        FeesWithdrawn,
        RelayRotated,
        TransferFeeUpdated,
        OperationFeeUpdated,
        PauseChanged,
        OwnershipOffered,
        OwnershipTransferred,
        ProxyBound,
        ProxyOwnershipOffered,
        ProxyOwnershipTransferred,
    );

    Ok(None)
}

/// Decode a single `Program data:` log line.
pub fn decode_log_line(line: &str) -> Result<Option<BridgeEvent>, DecodeError> {
    let Some(encoded) = line.strip_prefix(PROGRAM_DATA) else {
        return Ok(None);
    };
    let data = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
    decode_event(&data)
}

/// Collect every bridge event in a transaction's logs, in emission order.
/// Undecodable lines are logged and skipped.
pub fn parse_logs<S: AsRef<str>>(logs: &[S]) -> Vec<BridgeEvent> {
    let mut events = Vec::new();

    for line in logs {
        match decode_log_line(line.as_ref()) {
            Ok(Some(event)) => {
                debug!(?event, "decoded bridge event");
                events.push(event);
            }
            Ok(None) => {}
            Err(err) => warn!(%err, line = line.as_ref(), "skipping undecodable event"),
        }
    }

    events
}

/// Departure records the relay must forward.
pub fn departures<S: AsRef<str>>(logs: &[S]) -> Vec<DepartureRecord> {
    parse_logs(logs)
        .iter()
        .filter_map(|event| match event {
            BridgeEvent::BridgeStarted(started) => Some(DepartureRecord::from(started)),
            _ => None,
        })
        .collect()
}
