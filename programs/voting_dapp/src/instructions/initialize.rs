use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::VotingLedger;

pub fn handler(ctx: Context<Initialize>, destination: String) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.initialize(ctx.accounts.xcall.key(), destination, ctx.bumps.ledger)?;

    msg!(
        "Voting dApp initialized: xcall={}, destination={}",
        ledger.config.xcall,
        ledger.config.destination
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    // init_if_needed so a second call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + VotingLedger::SIZE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, VotingLedger>,

    /// CHECK: xCall gateway program, only its id is stored
    #[account(executable)]
    pub xcall: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
