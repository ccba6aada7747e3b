//! Owner-gated actions forwarded to the gateway
//!
//! The proxy config PDA is the gateway owner, so each forwarder checks the
//! proxy owner and then signs the gateway call with the proxy seeds.

use anchor_lang::prelude::*;
use gateway::program::Gateway;
use gateway::state::BridgeConfig;
use ledger::program::Ledger;
use ledger::state::Holding;

use crate::state::*;

#[derive(Accounts)]
pub struct Forward<'info> {
    #[account(
        seeds = [GOVERNANCE_SEED],
        bump = proxy_config.bump
    )]
    pub proxy_config: Account<'info, ProxyConfig>,

    #[account(mut)]
    pub bridge_config: Account<'info, BridgeConfig>,

    pub owner: Signer<'info>,

    pub gateway_program: Program<'info, Gateway>,
}

impl<'info> Forward<'info> {
    fn authorize(&self) -> Result<()> {
        self.proxy_config
            .authorize_forward(&self.owner.key(), &self.bridge_config.key())
    }

    fn update_config(&self) -> gateway::cpi::accounts::UpdateConfig<'info> {
        gateway::cpi::accounts::UpdateConfig {
            bridge_config: self.bridge_config.to_account_info(),
            owner: self.proxy_config.to_account_info(),
        }
    }
}

pub fn update_transfer_fee(ctx: Context<Forward>, basis_points: u16) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::set_transfer_fee(
        CpiContext::new_with_signer(
            ctx.accounts.gateway_program.to_account_info(),
            ctx.accounts.update_config(),
            signer_seeds,
        ),
        basis_points,
    )
}

pub fn update_operation_fee(ctx: Context<Forward>, fee: u64) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::set_operation_fee(
        CpiContext::new_with_signer(
            ctx.accounts.gateway_program.to_account_info(),
            ctx.accounts.update_config(),
            signer_seeds,
        ),
        fee,
    )
}

pub fn pause_bridge(ctx: Context<Forward>) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::pause(CpiContext::new_with_signer(
        ctx.accounts.gateway_program.to_account_info(),
        ctx.accounts.update_config(),
        signer_seeds,
    ))
}

pub fn unpause_bridge(ctx: Context<Forward>) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::unpause(CpiContext::new_with_signer(
        ctx.accounts.gateway_program.to_account_info(),
        ctx.accounts.update_config(),
        signer_seeds,
    ))
}

pub fn change_relay_address(ctx: Context<Forward>, new_identity: Pubkey) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::rotate_relay(
        CpiContext::new_with_signer(
            ctx.accounts.gateway_program.to_account_info(),
            ctx.accounts.update_config(),
            signer_seeds,
        ),
        new_identity,
    )
}

pub fn transfer_bridge_ownership(ctx: Context<Forward>, new_owner: Pubkey) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::transfer_ownership(
        CpiContext::new_with_signer(
            ctx.accounts.gateway_program.to_account_info(),
            ctx.accounts.update_config(),
            signer_seeds,
        ),
        new_owner,
    )
}

/// Complete a gateway ownership offer made to this proxy.
pub fn accept_bridge_ownership(ctx: Context<Forward>) -> Result<()> {
    ctx.accounts.authorize()?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::accept_ownership(CpiContext::new_with_signer(
        ctx.accounts.gateway_program.to_account_info(),
        gateway::cpi::accounts::AcceptOwnership {
            bridge_config: ctx.accounts.bridge_config.to_account_info(),
            new_owner: ctx.accounts.proxy_config.to_account_info(),
        },
        signer_seeds,
    ))
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(
        seeds = [GOVERNANCE_SEED],
        bump = proxy_config.bump
    )]
    pub proxy_config: Account<'info, ProxyConfig>,

    pub bridge_config: Account<'info, BridgeConfig>,

    #[account(mut)]
    pub bridge_holding: Account<'info, Holding>,

    #[account(mut)]
    pub recipient_holding: Account<'info, Holding>,

    pub owner: Signer<'info>,

    pub gateway_program: Program<'info, Gateway>,

    pub ledger_program: Program<'info, Ledger>,
}

/// Sweep the gateway's collected fees to `recipient_holding`.
pub fn withdraw_fees_to(ctx: Context<WithdrawFees>) -> Result<()> {
    ctx.accounts
        .proxy_config
        .authorize_forward(&ctx.accounts.owner.key(), &ctx.accounts.bridge_config.key())?;

    let bump = [ctx.accounts.proxy_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[GOVERNANCE_SEED, &bump]];

    gateway::cpi::sweep_fees_to(CpiContext::new_with_signer(
        ctx.accounts.gateway_program.to_account_info(),
        gateway::cpi::accounts::SweepFees {
            bridge_config: ctx.accounts.bridge_config.to_account_info(),
            bridge_holding: ctx.accounts.bridge_holding.to_account_info(),
            recipient_holding: ctx.accounts.recipient_holding.to_account_info(),
            owner: ctx.accounts.proxy_config.to_account_info(),
            ledger_program: ctx.accounts.ledger_program.to_account_info(),
        },
        signer_seeds,
    ))
}
