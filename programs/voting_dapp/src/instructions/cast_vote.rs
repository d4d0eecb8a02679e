use anchor_lang::prelude::*;
use xcall_dapp::{XCallCpi, XCallDappError};

use crate::constants::*;
use crate::state::{VoteAction, VotingLedger};

/// Counts the vote, then sends it through xCall. Accounts the gateway needs
/// for `send_call_message` are passed as remaining accounts.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CastVote<'info>>,
    action: VoteAction,
    value: u64,
) -> Result<()> {
    let bump = [ctx.accounts.ledger.bump];
    let ledger_seeds: &[&[u8]] = &[LEDGER_SEED, &bump];
    let mut gateway = XCallCpi::new(
        ctx.accounts.xcall.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        ledger_seeds,
        ctx.remaining_accounts,
    );

    let ledger = &mut ctx.accounts.ledger;
    let request_id = ledger.cast_vote(&mut gateway, action, value)?;

    msg!(
        "Vote cast: action={}, request_id={}, yes={}, no={}",
        action,
        request_id,
        ledger.yes,
        ledger.no
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VotingLedger>,

    /// CHECK: must be the gateway stored at initialization
    #[account(
        executable,
        address = ledger.config.xcall @ XCallDappError::GatewayMismatch
    )]
    pub xcall: UncheckedAccount<'info>,

    #[account(mut)]
    pub voter: Signer<'info>,
}
