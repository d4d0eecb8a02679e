use anchor_lang::prelude::*;
use xcall_dapp::XCallCpi;

use crate::constants::*;
use crate::state::HelloWorldState;

/// Accounts the gateway needs for `get_network_address` are passed as
/// remaining accounts.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Initialize<'info>>,
    destination: String,
) -> Result<()> {
    let bump = [ctx.bumps.state];
    let state_seeds: &[&[u8]] = &[STATE_SEED, &bump];
    let mut gateway = XCallCpi::new(
        ctx.accounts.xcall.to_account_info(),
        ctx.accounts.state.to_account_info(),
        state_seeds,
        ctx.remaining_accounts,
    );

    let xcall = ctx.accounts.xcall.key();
    let state = &mut ctx.accounts.state;
    state.initialize(&mut gateway, xcall, destination, bump[0])?;

    msg!(
        "Hello world initialized: xcall={}, destination={}, network_id={}",
        state.config.xcall,
        state.config.destination,
        state.network_id
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    // init_if_needed so a second call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + HelloWorldState::SIZE,
        seeds = [STATE_SEED],
        bump
    )]
    pub state: Account<'info, HelloWorldState>,

    /// CHECK: xCall gateway program, only its id is stored
    #[account(executable)]
    pub xcall: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
