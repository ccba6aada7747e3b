//! Program-derived addresses

use anchor_lang::prelude::Pubkey;
use gateway::state::BRIDGE_CONFIG_SEED;
use governance::state::GOVERNANCE_SEED;
use ledger::state::{ALLOWANCE_SEED, HOLDING_SEED, LEDGER_SEED};

use crate::config::SdkConfig;

pub fn ledger_state(ledger_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_SEED], ledger_program)
}

pub fn holding(ledger_program: &Pubkey, holder: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[HOLDING_SEED, holder.as_ref()], ledger_program)
}

pub fn allowance(ledger_program: &Pubkey, holder: &Pubkey, spender: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ALLOWANCE_SEED, holder.as_ref(), spender.as_ref()],
        ledger_program,
    )
}

pub fn bridge_config(gateway_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BRIDGE_CONFIG_SEED], gateway_program)
}

pub fn proxy_config(governance_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GOVERNANCE_SEED], governance_program)
}

/// Fixed addresses of one bridge deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeAddresses {
    pub ledger_state: Pubkey,
    /// Gateway identity: signs mint/burn and holds retained fees
    pub bridge_config: Pubkey,
    pub bridge_holding: Pubkey,
    /// Proxy identity: installed as gateway owner
    pub proxy_config: Pubkey,
}

impl BridgeAddresses {
    pub fn derive(config: &SdkConfig) -> Self {
        let (bridge_config, _) = bridge_config(&config.gateway_program_id);

        Self {
            ledger_state: ledger_state(&config.ledger_program_id).0,
            bridge_config,
            bridge_holding: holding(&config.ledger_program_id, &bridge_config).0,
            proxy_config: proxy_config(&config.governance_program_id).0,
        }
    }

    pub fn holding_of(&self, config: &SdkConfig, holder: &Pubkey) -> Pubkey {
        holding(&config.ledger_program_id, holder).0
    }

    /// Allowance a depositor grants the gateway before departing.
    pub fn gateway_allowance_of(&self, config: &SdkConfig, depositor: &Pubkey) -> Pubkey {
        allowance(&config.ledger_program_id, depositor, &self.bridge_config).0
    }
}
