use anchor_lang::prelude::*;
use xcall_dapp::log_payload;

use crate::constants::*;
use crate::state::VoteTally;

/// Failing here makes the gateway send the rollback home
pub fn handler(ctx: Context<HandleCallMessage>, from: String, data: Vec<u8>) -> Result<()> {
    log_payload(&data);

    let tally = &mut ctx.accounts.tally;
    let (action, event) =
        tally.handle_call_message(&ctx.accounts.xcall_authority.key(), &from, &data)?;

    msg!(
        "Vote received: action={}, from={}, yes={}, no={}",
        action,
        from,
        tally.yes,
        tally.no
    );

    event.emit();
    Ok(())
}

#[derive(Accounts)]
pub struct HandleCallMessage<'info> {
    #[account(
        mut,
        seeds = [TALLY_SEED],
        bump = tally.bump
    )]
    pub tally: Account<'info, VoteTally>,

    /// Gateway authority PDA, checked against the stored gateway
    pub xcall_authority: Signer<'info>,
}
