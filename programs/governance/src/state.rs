use anchor_lang::prelude::*;
use bridge_common::Ownership;

use crate::error::GovernanceError;

pub const GOVERNANCE_SEED: &[u8] = b"governance";

/// Proxy configuration. Its PDA is the identity installed as gateway owner.
#[account]
#[derive(Debug)]
pub struct ProxyConfig {
    /// Operator key slot, rotatable in two steps
    pub ownership: Ownership,
    /// Bound gateway `BridgeConfig`, `Pubkey::default()` until `bind`
    pub bridge: Pubkey,
    pub bump: u8,
}

impl ProxyConfig {
    pub const SIZE: usize = 8 + // discriminator
        Ownership::LEN + // ownership
        32 + // bridge
        1; // bump

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            ownership: Ownership::new(owner),
            bridge: Pubkey::default(),
            bump,
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.ownership.is_owner(key)
    }

    pub fn is_bound(&self) -> bool {
        self.bridge != Pubkey::default()
    }

    /// Uninitialized → Bound, exactly once.
    pub fn bind(&mut self, caller: &Pubkey, gateway: Pubkey) -> Result<()> {
        require!(self.is_owner(caller), GovernanceError::OnlyOwner);
        require!(!self.is_bound(), GovernanceError::AlreadyBound);
        require!(gateway != Pubkey::default(), GovernanceError::InvalidAddress);

        self.bridge = gateway;
        Ok(())
    }

    /// Gate for every forwarded gateway action.
    pub fn authorize_forward(&self, caller: &Pubkey, bridge_config: &Pubkey) -> Result<()> {
        require!(self.is_owner(caller), GovernanceError::OnlyOwner);
        require!(self.is_bound(), GovernanceError::NotBound);
        require_keys_eq!(self.bridge, *bridge_config, GovernanceError::BridgeMismatch);
        Ok(())
    }
}
