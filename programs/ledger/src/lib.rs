//! Ledger - fungible balance registry for the bridge
//!
//! Holds balances and total supply under a fixed ceiling. Minting and
//! burning are restricted to the owner and to the gateway identity bound
//! once through `bind_authority`. Transfers, approvals and delegated
//! transfers follow ordinary fungible-ledger rules.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("HeBVKxn8rk2kuUZ8BN8zvizN4zfLNr6CVmQdKeBHsjCv");

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

/// Upper bound for the gateway's proportional fee, in basis points (10%).
#[constant]
pub const MAX_TRANSFER_FEE: u16 = 1_000;

/// Upper bound for the gateway's fixed per-departure fee, in base units.
#[constant]
pub const MAX_OPERATION_FEE: u64 = 10_000_000_000;

#[program]
pub mod ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize(ctx, params)
    }

    pub fn open_holding(ctx: Context<OpenHolding>, holder: Pubkey) -> Result<()> {
        instructions::open_holding(ctx, holder)
    }

    pub fn bind_authority(ctx: Context<BindAuthority>, gateway: Pubkey, proxy: Pubkey) -> Result<()> {
        instructions::bind_authority(ctx, gateway, proxy)
    }

    pub fn mint(ctx: Context<MintTo>, amount: u64) -> Result<()> {
        instructions::mint(ctx, amount)
    }

    pub fn burn_from(ctx: Context<BurnFrom>, amount: u64) -> Result<()> {
        instructions::burn_from(ctx, amount)
    }

    pub fn transfer(ctx: Context<Transfer>, amount: u64) -> Result<()> {
        instructions::transfer(ctx, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve(ctx, spender, amount)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from(ctx, amount)
    }
}
