use anchor_lang::prelude::*;
use ledger::program::Ledger;
use ledger::state::{LedgerState, LEDGER_SEED};

use crate::state::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Normally the governance proxy's config PDA
    pub owner: Pubkey,
    /// Relay identity allowed to call `arrive`
    pub offchain_processor: Pubkey,
    pub transfer_fee_basis_points: u16,
    pub operation_fee: u64,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = deployer,
        space = BridgeConfig::SIZE,
        seeds = [BRIDGE_CONFIG_SEED],
        bump
    )]
    pub bridge_config: Account<'info, BridgeConfig>,

    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger_state.bump,
        seeds::program = ledger_program.key()
    )]
    pub ledger_state: Account<'info, LedgerState>,

    /// CHECK: created by the ledger program as the gateway's fee holding
    #[account(mut)]
    pub bridge_holding: UncheckedAccount<'info>,

    #[account(mut)]
    pub deployer: Signer<'info>,

    pub ledger_program: Program<'info, Ledger>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let config = BridgeConfig::new(
        params.owner,
        ctx.accounts.ledger_state.key(),
        params.offchain_processor,
        params.transfer_fee_basis_points,
        params.operation_fee,
        ctx.bumps.bridge_config,
    )?;
    ctx.accounts.bridge_config.set_inner(config);

    // The config PDA holds retained fees as its own ledger balance
    ledger::cpi::open_holding(
        CpiContext::new(
            ctx.accounts.ledger_program.to_account_info(),
            ledger::cpi::accounts::OpenHolding {
                holding: ctx.accounts.bridge_holding.to_account_info(),
                payer: ctx.accounts.deployer.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
        ),
        ctx.accounts.bridge_config.key(),
    )?;

    msg!(
        "Gateway initialized: owner {}, relay {}, fee {} bps + {}",
        params.owner,
        params.offchain_processor,
        params.transfer_fee_basis_points,
        params.operation_fee
    );
    Ok(())
}
