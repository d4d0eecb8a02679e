use anchor_lang::prelude::*;
use xcall_dapp::log_payload;

use crate::constants::*;
use crate::state::VotingLedger;

/// Only rollbacks are ever delivered here, anything else is rejected
pub fn handler(ctx: Context<HandleCallMessage>, from: String, data: Vec<u8>) -> Result<()> {
    log_payload(&data);

    let ledger = &mut ctx.accounts.ledger;
    let (action, event) =
        ledger.handle_call_message(&ctx.accounts.xcall_authority.key(), &from, &data)?;

    msg!(
        "Vote rolled back: action={}, yes={}, no={}",
        action,
        ledger.yes,
        ledger.no
    );

    event.emit();
    Ok(())
}

#[derive(Accounts)]
pub struct HandleCallMessage<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, VotingLedger>,

    /// Gateway authority PDA, checked against the stored gateway
    pub xcall_authority: Signer<'info>,
}
