//! SDK configuration

use std::path::Path;

use anchor_lang::prelude::Pubkey;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Solana RPC URL
    pub rpc_url: String,

    /// Commitment level used when reading state and logs
    pub commitment: String,

    #[serde(with = "crate::types::pubkey_str")]
    pub ledger_program_id: Pubkey,

    #[serde(with = "crate::types::pubkey_str")]
    pub gateway_program_id: Pubkey,

    #[serde(with = "crate::types::pubkey_str")]
    pub governance_program_id: Pubkey,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8899".to_string(),
            commitment: "confirmed".to_string(),
            ledger_program_id: ::ledger::ID,
            gateway_program_id: ::gateway::ID,
            governance_program_id: ::governance::ID,
        }
    }
}

impl SdkConfig {
    /// Defaults overridden by `BRIDGE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            rpc_url: std::env::var("BRIDGE_RPC_URL").unwrap_or(defaults.rpc_url),
            commitment: std::env::var("BRIDGE_COMMITMENT").unwrap_or(defaults.commitment),
            ledger_program_id: program_id_from_env(
                "BRIDGE_LEDGER_PROGRAM_ID",
                defaults.ledger_program_id,
            )?,
            gateway_program_id: program_id_from_env(
                "BRIDGE_GATEWAY_PROGRAM_ID",
                defaults.gateway_program_id,
            )?,
            governance_program_id: program_id_from_env(
                "BRIDGE_GOVERNANCE_PROGRAM_ID",
                defaults.governance_program_id,
            )?,
        })
    }

    /// Load a JSON config. Missing fields keep their defaults; `~` is expanded.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        debug!(path = %expanded, "loading bridge sdk config");

        let raw = std::fs::read_to_string(Path::new(&expanded))
            .with_context(|| format!("Failed to read config file {expanded}"))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid config file {expanded}"))
    }
}

fn program_id_from_env(var: &str, default: Pubkey) -> Result<Pubkey> {
    match std::env::var(var) {
        Ok(value) => value.parse().with_context(|| format!("Invalid {var}")),
        Err(_) => Ok(default),
    }
}
