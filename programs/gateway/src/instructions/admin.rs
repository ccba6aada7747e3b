//! Owner-gated configuration

use anchor_lang::prelude::*;
use ledger::program::Ledger;
use ledger::state::Holding;

use crate::error::GatewayError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [BRIDGE_CONFIG_SEED],
        bump = bridge_config.bump,
        constraint = bridge_config.is_owner(&owner.key()) @ GatewayError::OnlyOwner
    )]
    pub bridge_config: Account<'info, BridgeConfig>,

    pub owner: Signer<'info>,
}

pub fn rotate_relay(ctx: Context<UpdateConfig>, new_identity: Pubkey) -> Result<()> {
    let previous = ctx.accounts.bridge_config.rotate_relay(new_identity)?;

    emit!(RelayRotated {
        previous,
        current: new_identity,
    });
    msg!("Offchain processor changed from {} to {}", previous, new_identity);
    Ok(())
}

pub fn set_transfer_fee(ctx: Context<UpdateConfig>, basis_points: u16) -> Result<()> {
    ctx.accounts.bridge_config.set_transfer_fee(basis_points)?;

    emit!(TransferFeeUpdated { basis_points });
    msg!("Transfer fee set to {} bps", basis_points);
    Ok(())
}

pub fn set_operation_fee(ctx: Context<UpdateConfig>, fee: u64) -> Result<()> {
    ctx.accounts.bridge_config.set_operation_fee(fee)?;

    emit!(OperationFeeUpdated { fee });
    msg!("Operation fee set to {}", fee);
    Ok(())
}

pub fn set_paused(ctx: Context<UpdateConfig>, paused: bool) -> Result<()> {
    ctx.accounts.bridge_config.set_paused(paused)?;

    emit!(PauseChanged { paused });
    msg!("Bridge {} paused", if paused { "is now" } else { "is no longer" });
    Ok(())
}

#[derive(Accounts)]
pub struct SweepFees<'info> {
    #[account(
        seeds = [BRIDGE_CONFIG_SEED],
        bump = bridge_config.bump,
        constraint = bridge_config.is_owner(&owner.key()) @ GatewayError::OnlyOwner
    )]
    pub bridge_config: Account<'info, BridgeConfig>,

    #[account(
        mut,
        constraint = bridge_holding.holder == bridge_config.key() @ GatewayError::InvalidFeeHolding
    )]
    pub bridge_holding: Account<'info, Holding>,

    #[account(mut)]
    pub recipient_holding: Account<'info, Holding>,

    pub owner: Signer<'info>,

    pub ledger_program: Program<'info, Ledger>,
}

/// Move the gateway's entire ledger balance to the recipient.
pub fn sweep_fees_to(ctx: Context<SweepFees>) -> Result<()> {
    let amount = ctx.accounts.bridge_holding.amount;
    let recipient = ctx.accounts.recipient_holding.holder;

    if amount > 0 {
        let bump = [ctx.accounts.bridge_config.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[BRIDGE_CONFIG_SEED, &bump]];

        ledger::cpi::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.ledger_program.to_account_info(),
                ledger::cpi::accounts::Transfer {
                    from_holding: ctx.accounts.bridge_holding.to_account_info(),
                    to_holding: ctx.accounts.recipient_holding.to_account_info(),
                    authority: ctx.accounts.bridge_config.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(FeesWithdrawn { recipient, amount });
    msg!("Withdrew {} in fees to {}", amount, recipient);
    Ok(())
}
