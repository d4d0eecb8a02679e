use anchor_lang::prelude::*;
use voting_dapp::state::Votes;

use crate::constants::*;
use crate::state::VoteTally;

pub fn get_votes(ctx: Context<ReadTally>) -> Result<Votes> {
    ctx.accounts.tally.votes()
}

pub fn get_votes_cap(ctx: Context<ReadTally>) -> Result<u64> {
    ctx.accounts.tally.votes_cap()
}

pub fn get_call_service(ctx: Context<ReadTally>) -> Result<Pubkey> {
    ctx.accounts.tally.call_service()
}

#[derive(Accounts)]
pub struct ReadTally<'info> {
    #[account(
        seeds = [TALLY_SEED],
        bump = tally.bump
    )]
    pub tally: Account<'info, VoteTally>,
}
