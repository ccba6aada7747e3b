//! Gateway configuration and fee rules

use anchor_lang::prelude::*;
use bridge_common::{bounds, Ownership};
use ledger::{MAX_OPERATION_FEE, MAX_TRANSFER_FEE};

use crate::error::GatewayError;
use crate::events::BridgeStarted;

pub const BRIDGE_CONFIG_SEED: &[u8] = b"bridge_config";

/// Longest accepted destination chain or address, in bytes
pub const MAX_DESTINATION_LEN: usize = 64;

/// Gateway configuration. Its PDA is the gateway's on-ledger identity:
/// it signs mint/burn calls and owns the fee holding.
#[account]
#[derive(Debug)]
pub struct BridgeConfig {
    /// Two-step owner slot, normally held by the governance proxy
    pub ownership: Ownership,
    /// `LedgerState` address of the bridged token
    pub token: Pubkey,
    /// Relay identity, the only signer allowed to call `arrive`
    pub offchain_processor: Pubkey,
    /// Proportional fee in basis points
    pub transfer_fee_basis_points: u16,
    /// Fixed fee per departure
    pub operation_fee: u64,
    pub paused: bool,
    pub bump: u8,
}

/// Fee split of a single departure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Departure {
    pub amount: u64,
    pub fee: u64,
    pub net_amount: u64,
}

impl Departure {
    pub fn record(
        &self,
        caller: Pubkey,
        destination_chain: String,
        destination_address: String,
    ) -> BridgeStarted {
        BridgeStarted {
            caller,
            amount: self.amount,
            net_amount: self.net_amount,
            destination_chain,
            destination_address,
        }
    }
}

impl BridgeConfig {
    pub const SIZE: usize = 8 + // discriminator
        Ownership::LEN + // ownership
        32 + // token
        32 + // offchain_processor
        2 + // transfer_fee_basis_points
        8 + // operation_fee
        1 + // paused
        1; // bump

    pub fn new(
        owner: Pubkey,
        token: Pubkey,
        offchain_processor: Pubkey,
        transfer_fee_basis_points: u16,
        operation_fee: u64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            owner != Pubkey::default() && offchain_processor != Pubkey::default(),
            GatewayError::InvalidAddress
        );
        validate_transfer_fee(transfer_fee_basis_points)?;
        validate_operation_fee(operation_fee)?;

        Ok(Self {
            ownership: Ownership::new(owner),
            token,
            offchain_processor,
            transfer_fee_basis_points,
            operation_fee,
            paused: false,
            bump,
        })
    }

    pub fn owner(&self) -> Pubkey {
        self.ownership.owner
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.ownership.is_owner(key)
    }

    pub fn require_owner(&self, key: &Pubkey) -> Result<()> {
        require!(self.is_owner(key), GatewayError::OnlyOwner);
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(!self.paused, GatewayError::BridgePaused);
        Ok(())
    }

    /// `floor(amount * bps / 10000) + operation_fee`
    pub fn fee_for(&self, amount: u64) -> Result<u64> {
        let proportional = bounds::basis_points_of(amount, self.transfer_fee_basis_points)?;
        proportional
            .checked_add(self.operation_fee)
            .ok_or(GatewayError::FeeExceedsAmount.into())
    }

    /// Validate a departure and split it into fee and burned amount.
    /// The owner bridges fee-free.
    pub fn quote_departure(
        &self,
        depositor: &Pubkey,
        amount: u64,
        destination_chain: &str,
        destination_address: &str,
    ) -> Result<Departure> {
        self.require_active()?;
        require!(amount > 0, GatewayError::ZeroAmount);
        validate_destination(destination_chain, destination_address)?;

        let fee = if self.is_owner(depositor) {
            0
        } else {
            self.fee_for(amount)?
        };
        require!(fee < amount, GatewayError::FeeExceedsAmount);

        Ok(Departure {
            amount,
            fee,
            net_amount: amount - fee,
        })
    }

    /// Gate for `arrive`: active bridge, relay signer, non-zero amount.
    pub fn authorize_arrival(&self, caller: &Pubkey, amount: u64) -> Result<()> {
        self.require_active()?;
        require_keys_eq!(
            self.offchain_processor,
            *caller,
            GatewayError::OnlyOffchainProcessor
        );
        require!(amount > 0, GatewayError::ZeroAmount);
        Ok(())
    }

    /// Returns the replaced relay identity.
    pub fn rotate_relay(&mut self, new_identity: Pubkey) -> Result<Pubkey> {
        require!(new_identity != Pubkey::default(), GatewayError::InvalidAddress);
        Ok(std::mem::replace(&mut self.offchain_processor, new_identity))
    }

    pub fn set_transfer_fee(&mut self, basis_points: u16) -> Result<()> {
        validate_transfer_fee(basis_points)?;
        self.transfer_fee_basis_points = basis_points;
        Ok(())
    }

    pub fn set_operation_fee(&mut self, fee: u64) -> Result<()> {
        validate_operation_fee(fee)?;
        self.operation_fee = fee;
        Ok(())
    }

    /// Active ⇄ Paused. Repeating the current state is rejected.
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        if paused {
            require!(!self.paused, GatewayError::BridgePaused);
        } else {
            require!(self.paused, GatewayError::BridgeNotPaused);
        }
        self.paused = paused;
        Ok(())
    }
}

pub fn validate_transfer_fee(basis_points: u16) -> Result<()> {
    require!(basis_points <= MAX_TRANSFER_FEE, GatewayError::FeeTooHigh);
    Ok(())
}

pub fn validate_operation_fee(fee: u64) -> Result<()> {
    require!(fee <= MAX_OPERATION_FEE, GatewayError::OperationFeeTooHigh);
    Ok(())
}

pub fn validate_destination(destination_chain: &str, destination_address: &str) -> Result<()> {
    let valid = |s: &str| !s.is_empty() && s.len() <= MAX_DESTINATION_LEN;
    require!(
        valid(destination_chain) && valid(destination_address),
        GatewayError::InvalidDestination
    );
    Ok(())
}
