use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Votes, VotingLedger};

pub fn get_votes(ctx: Context<ReadLedger>) -> Result<Votes> {
    ctx.accounts.ledger.votes()
}

pub fn get_destination(ctx: Context<ReadLedger>) -> Result<String> {
    Ok(ctx.accounts.ledger.config.destination()?.into_string())
}

pub fn get_xcall_address(ctx: Context<ReadLedger>) -> Result<Pubkey> {
    ctx.accounts.ledger.config.xcall_address()
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VotingLedger>,
}
