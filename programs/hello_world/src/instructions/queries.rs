use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::HelloWorldState;

pub fn get_destination(ctx: Context<ReadState>) -> Result<String> {
    Ok(ctx.accounts.state.config.destination()?.into_string())
}

pub fn get_xcall_address(ctx: Context<ReadState>) -> Result<Pubkey> {
    ctx.accounts.state.config.xcall_address()
}

#[derive(Accounts)]
pub struct ReadState<'info> {
    #[account(
        seeds = [STATE_SEED],
        bump = state.bump
    )]
    pub state: Account<'info, HelloWorldState>,
}
