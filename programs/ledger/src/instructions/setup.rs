use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::events::TokensMinted;
use crate::state::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Minted to the deployer at creation
    pub initial_supply: u64,
    /// Fixed ceiling for total supply
    pub max_supply: u64,
    pub decimals: u8,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = LedgerState::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = owner,
        space = Holding::SIZE,
        seeds = [HOLDING_SEED, owner.key().as_ref()],
        bump
    )]
    pub owner_holding: Account<'info, Holding>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    require!(
        params.initial_supply <= params.max_supply,
        LedgerError::InvalidSupply
    );

    let owner = ctx.accounts.owner.key();
    let accounts = &mut *ctx.accounts;

    accounts.ledger_state.set_inner(LedgerState::new(
        owner,
        params.max_supply,
        params.decimals,
        ctx.bumps.ledger_state,
    ));
    accounts
        .owner_holding
        .set_inner(Holding::new(owner, ctx.bumps.owner_holding));

    if params.initial_supply > 0 {
        accounts
            .ledger_state
            .mint(&owner, &mut accounts.owner_holding, params.initial_supply)?;
        emit!(TokensMinted {
            to: owner,
            amount: params.initial_supply,
        });
    }

    msg!(
        "Ledger initialized: owner {}, supply {}/{}",
        owner,
        params.initial_supply,
        params.max_supply
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct OpenHolding<'info> {
    #[account(
        init,
        payer = payer,
        space = Holding::SIZE,
        seeds = [HOLDING_SEED, holder.as_ref()],
        bump
    )]
    pub holding: Account<'info, Holding>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Create an empty holding. Anyone may pay for anyone's holding.
pub fn open_holding(ctx: Context<OpenHolding>, holder: Pubkey) -> Result<()> {
    require!(holder != Pubkey::default(), LedgerError::InvalidAddress);

    ctx.accounts
        .holding
        .set_inner(Holding::new(holder, ctx.bumps.holding));

    msg!("Opened holding for {}", holder);
    Ok(())
}
