//! Ledger state and balance rules

use anchor_lang::prelude::*;
use bridge_common::bounds;

use crate::error::LedgerError;

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDING_SEED: &[u8] = b"holding";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";

/// Global ledger record
#[account]
#[derive(Debug)]
pub struct LedgerState {
    /// Deployer; may always mint and burn and performs the one-time binding
    pub owner: Pubkey,
    /// Bound gateway identity, `Pubkey::default()` until bound
    pub bridge: Pubkey,
    /// Bound governance proxy identity, `Pubkey::default()` until bound
    pub oracle: Pubkey,
    /// Sum of all holdings
    pub total_supply: u64,
    /// Ceiling for `total_supply`
    pub max_supply: u64,
    pub decimals: u8,
    pub bump: u8,
}

impl LedgerState {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // bridge
        32 + // oracle
        8 + // total_supply
        8 + // max_supply
        1 + // decimals
        1; // bump

    pub fn new(owner: Pubkey, max_supply: u64, decimals: u8, bump: u8) -> Self {
        Self {
            owner,
            bridge: Pubkey::default(),
            oracle: Pubkey::default(),
            total_supply: 0,
            max_supply,
            decimals,
            bump,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bridge != Pubkey::default()
    }

    /// Mint/burn is open to the owner and, once bound, the gateway.
    pub fn can_mint_burn(&self, caller: &Pubkey) -> bool {
        *caller == self.owner || (self.is_bound() && *caller == self.bridge)
    }

    /// One-time wiring of the gateway and proxy identities.
    pub fn bind_authority(&mut self, caller: &Pubkey, gateway: Pubkey, proxy: Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, LedgerError::Unauthorized);
        require!(!self.is_bound(), LedgerError::AlreadyBound);
        require!(
            gateway != Pubkey::default() && proxy != Pubkey::default(),
            LedgerError::InvalidAddress
        );

        self.bridge = gateway;
        self.oracle = proxy;
        Ok(())
    }

    pub fn mint(&mut self, caller: &Pubkey, to: &mut Holding, amount: u64) -> Result<()> {
        require!(self.can_mint_burn(caller), LedgerError::Unauthorized);
        require!(amount > 0, LedgerError::ZeroAmount);

        let supply = bounds::checked_add(self.total_supply, amount)?;
        require!(supply <= self.max_supply, LedgerError::SupplyCapExceeded);

        to.credit(amount)?;
        self.total_supply = supply;
        Ok(())
    }

    pub fn burn(&mut self, caller: &Pubkey, from: &mut Holding, amount: u64) -> Result<()> {
        require!(self.can_mint_burn(caller), LedgerError::Unauthorized);
        require!(amount > 0, LedgerError::ZeroAmount);

        from.debit(amount)?;
        self.total_supply = bounds::checked_sub(self.total_supply, amount)?;
        Ok(())
    }
}

/// Balance of a single holder
#[account]
#[derive(Debug)]
pub struct Holding {
    pub holder: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Holding {
    pub const SIZE: usize = 8 + // discriminator
        32 + // holder
        8 + // amount
        1; // bump

    pub fn new(holder: Pubkey, bump: u8) -> Self {
        Self {
            holder,
            amount: 0,
            bump,
        }
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = bounds::checked_add(self.amount, amount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, LedgerError::InsufficientBalance);
        self.amount -= amount;
        Ok(())
    }
}

/// Amount `spender` may move out of `holder`'s balance
#[account]
#[derive(Debug)]
pub struct Allowance {
    pub holder: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    pub const SIZE: usize = 8 + // discriminator
        32 + // holder
        32 + // spender
        8 + // amount
        1; // bump

    pub fn spend(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, LedgerError::InsufficientAllowance);
        self.amount -= amount;
        Ok(())
    }
}

/// Move `amount` between two distinct holdings. Leaves both untouched on error.
pub fn transfer_between(from: &mut Holding, to: &mut Holding, amount: u64) -> Result<()> {
    require!(amount > 0, LedgerError::ZeroAmount);
    require_keys_neq!(from.holder, to.holder, LedgerError::SelfTransfer);

    let credited = bounds::checked_add(to.amount, amount)?;
    from.debit(amount)?;
    to.amount = credited;
    Ok(())
}

/// Delegated move. The allowance is checked before the balance but only
/// consumed once the move has gone through.
pub fn transfer_with_allowance(
    allowance: &mut Allowance,
    from: &mut Holding,
    to: &mut Holding,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(allowance.holder, from.holder, LedgerError::HolderMismatch);
    require!(allowance.amount >= amount, LedgerError::InsufficientAllowance);

    transfer_between(from, to, amount)?;
    allowance.spend(amount)
}
