//! Gateway - burn/mint bridge between two ledgers
//!
//! - `depart`: pulls value from a holder, keeps the fee, burns the rest and
//!   emits `BridgeStarted` for the off-chain relay
//! - `arrive`: the registered relay mints value delivered from the paired chain
//! - owner-gated configuration: fees, relay rotation, pause, fee sweeping
//!   and two-step ownership transfer
//!
//! The owner is expected to be the governance proxy's config PDA.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("GL9JUFzSGn6KKubnH2c2mbRS9JohokTAYTFVFzd5xv1D");

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod gateway {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize(ctx, params)
    }

    pub fn depart(
        ctx: Context<Depart>,
        amount: u64,
        destination_chain: String,
        destination_address: String,
    ) -> Result<()> {
        instructions::depart(ctx, amount, destination_chain, destination_address)
    }

    pub fn arrive(ctx: Context<Arrive>, amount: u64) -> Result<()> {
        instructions::arrive(ctx, amount)
    }

    pub fn rotate_relay(ctx: Context<UpdateConfig>, new_identity: Pubkey) -> Result<()> {
        instructions::rotate_relay(ctx, new_identity)
    }

    pub fn set_transfer_fee(ctx: Context<UpdateConfig>, basis_points: u16) -> Result<()> {
        instructions::set_transfer_fee(ctx, basis_points)
    }

    pub fn set_operation_fee(ctx: Context<UpdateConfig>, fee: u64) -> Result<()> {
        instructions::set_operation_fee(ctx, fee)
    }

    pub fn sweep_fees_to(ctx: Context<SweepFees>) -> Result<()> {
        instructions::sweep_fees_to(ctx)
    }

    pub fn pause(ctx: Context<UpdateConfig>) -> Result<()> {
        instructions::set_paused(ctx, true)
    }

    pub fn unpause(ctx: Context<UpdateConfig>) -> Result<()> {
        instructions::set_paused(ctx, false)
    }

    pub fn transfer_ownership(ctx: Context<UpdateConfig>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership(ctx)
    }
}
