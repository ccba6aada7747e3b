//! Bridge SDK - off-chain interface to the ledger, gateway and governance programs
//!
//! This SDK provides:
//! - PDA derivation for every program account
//! - Instruction builders for each program entry point
//! - Decoding of emitted events from transaction logs
//! - Relay-facing departure records
//! - Configuration loading

pub mod config;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod types;

pub use config::SdkConfig;
pub use events::{decode_event, parse_logs, BridgeEvent, DecodeError};
pub use pda::BridgeAddresses;
pub use types::*;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod prelude {
    pub use anchor_lang::prelude::*;
}

/// Install a `RUST_LOG`-driven subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
