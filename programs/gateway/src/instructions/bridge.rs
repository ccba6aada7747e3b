//! Value-moving instructions

use anchor_lang::prelude::*;
use ledger::program::Ledger;
use ledger::state::{Allowance, Holding, LedgerState};

use crate::error::GatewayError;
use crate::events::AssetMinted;
use crate::state::*;

#[derive(Accounts)]
pub struct Depart<'info> {
    #[account(
        seeds = [BRIDGE_CONFIG_SEED],
        bump = bridge_config.bump
    )]
    pub bridge_config: Account<'info, BridgeConfig>,

    #[account(
        mut,
        address = bridge_config.token @ GatewayError::InvalidToken
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        constraint = depositor_holding.holder == depositor.key() @ GatewayError::HolderMismatch
    )]
    pub depositor_holding: Account<'info, Holding>,

    /// Depositor's approval for the gateway to pull `amount`
    #[account(mut)]
    pub allowance: Account<'info, Allowance>,

    #[account(
        mut,
        constraint = bridge_holding.holder == bridge_config.key() @ GatewayError::InvalidFeeHolding
    )]
    pub bridge_holding: Account<'info, Holding>,

    pub depositor: Signer<'info>,

    pub ledger_program: Program<'info, Ledger>,
}

/// Lock `amount` in the gateway, burn it net of fees and emit the
/// departure record for the relay.
pub fn depart(
    ctx: Context<Depart>,
    amount: u64,
    destination_chain: String,
    destination_address: String,
) -> Result<()> {
    let depositor = ctx.accounts.depositor.key();
    let departure = ctx.accounts.bridge_config.quote_departure(
        &depositor,
        amount,
        &destination_chain,
        &destination_address,
    )?;

    let bump = [ctx.accounts.bridge_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[BRIDGE_CONFIG_SEED, &bump]];

    // Pull the full amount into gateway custody
    ledger::cpi::transfer_from(
        CpiContext::new_with_signer(
            ctx.accounts.ledger_program.to_account_info(),
            ledger::cpi::accounts::TransferFrom {
                allowance: ctx.accounts.allowance.to_account_info(),
                from_holding: ctx.accounts.depositor_holding.to_account_info(),
                to_holding: ctx.accounts.bridge_holding.to_account_info(),
                spender: ctx.accounts.bridge_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    // Burn everything except the fee, which stays as gateway balance
    ledger::cpi::burn_from(
        CpiContext::new_with_signer(
            ctx.accounts.ledger_program.to_account_info(),
            ledger::cpi::accounts::BurnFrom {
                ledger_state: ctx.accounts.ledger_state.to_account_info(),
                holding: ctx.accounts.bridge_holding.to_account_info(),
                authority: ctx.accounts.bridge_config.to_account_info(),
            },
            signer_seeds,
        ),
        departure.net_amount,
    )?;

    msg!(
        "Bridge started: {} sent {} ({} after fee) to {} on {}",
        depositor,
        amount,
        departure.net_amount,
        destination_address,
        destination_chain
    );
    emit!(departure.record(depositor, destination_chain, destination_address));
    Ok(())
}

#[derive(Accounts)]
pub struct Arrive<'info> {
    #[account(
        seeds = [BRIDGE_CONFIG_SEED],
        bump = bridge_config.bump
    )]
    pub bridge_config: Account<'info, BridgeConfig>,

    #[account(
        mut,
        address = bridge_config.token @ GatewayError::InvalidToken
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut)]
    pub recipient_holding: Account<'info, Holding>,

    pub offchain_processor: Signer<'info>,

    pub ledger_program: Program<'info, Ledger>,
}

/// Mint value delivered from the paired chain. Relay only.
pub fn arrive(ctx: Context<Arrive>, amount: u64) -> Result<()> {
    ctx.accounts
        .bridge_config
        .authorize_arrival(&ctx.accounts.offchain_processor.key(), amount)?;

    let bump = [ctx.accounts.bridge_config.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[BRIDGE_CONFIG_SEED, &bump]];

    ledger::cpi::mint(
        CpiContext::new_with_signer(
            ctx.accounts.ledger_program.to_account_info(),
            ledger::cpi::accounts::MintTo {
                ledger_state: ctx.accounts.ledger_state.to_account_info(),
                holding: ctx.accounts.recipient_holding.to_account_info(),
                authority: ctx.accounts.bridge_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let recipient = ctx.accounts.recipient_holding.holder;
    msg!("Asset minted: {} to {}", amount, recipient);
    emit!(AssetMinted { recipient, amount });
    Ok(())
}
