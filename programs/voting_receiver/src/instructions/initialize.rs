use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::VoteTally;

pub fn handler(ctx: Context<Initialize>, votes_cap: u64) -> Result<()> {
    let tally = &mut ctx.accounts.tally;
    tally.initialize(ctx.accounts.xcall.key(), votes_cap, ctx.bumps.tally)?;

    msg!(
        "Voting receiver initialized: xcall={}, votes_cap={}",
        tally.xcall,
        tally.votes_cap
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + VoteTally::SIZE,
        seeds = [TALLY_SEED],
        bump
    )]
    pub tally: Account<'info, VoteTally>,

    /// CHECK: xCall gateway program, only its id is stored
    #[account(executable)]
    pub xcall: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
