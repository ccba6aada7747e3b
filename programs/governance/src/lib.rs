//! Governance proxy
//!
//! Owns the gateway through its config PDA and is itself owned by a
//! rotatable operator key. Every privileged gateway action is re-exposed
//! here: the proxy checks its own owner, then signs the forwarded call.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("3LRuLNSt9UDMF1p4nQjU2sVSLh6bYzmWZPATNfEZbQeV");

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod governance {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn bind(ctx: Context<Bind>, gateway: Pubkey) -> Result<()> {
        instructions::bind(ctx, gateway)
    }

    pub fn update_transfer_fee(ctx: Context<Forward>, basis_points: u16) -> Result<()> {
        instructions::update_transfer_fee(ctx, basis_points)
    }

    pub fn update_operation_fee(ctx: Context<Forward>, fee: u64) -> Result<()> {
        instructions::update_operation_fee(ctx, fee)
    }

    pub fn pause_bridge(ctx: Context<Forward>) -> Result<()> {
        instructions::pause_bridge(ctx)
    }

    pub fn unpause_bridge(ctx: Context<Forward>) -> Result<()> {
        instructions::unpause_bridge(ctx)
    }

    pub fn change_relay_address(ctx: Context<Forward>, new_identity: Pubkey) -> Result<()> {
        instructions::change_relay_address(ctx, new_identity)
    }

    pub fn withdraw_fees_to(ctx: Context<WithdrawFees>) -> Result<()> {
        instructions::withdraw_fees_to(ctx)
    }

    pub fn transfer_bridge_ownership(ctx: Context<Forward>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_bridge_ownership(ctx, new_owner)
    }

    pub fn accept_bridge_ownership(ctx: Context<Forward>) -> Result<()> {
        instructions::accept_bridge_ownership(ctx)
    }

    pub fn transfer_ownership(ctx: Context<UpdateProxy>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership(ctx)
    }
}
