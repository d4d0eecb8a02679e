use anchor_lang::prelude::*;
use xcall_dapp::events::emit_all;
use xcall_dapp::log_payload;

use crate::constants::*;
use crate::state::{Delivery, HelloWorldState};

pub fn handler(ctx: Context<HandleCallMessage>, from: String, data: Vec<u8>) -> Result<()> {
    log_payload(&data);

    let delivery = ctx.accounts.state.handle_call_message(
        &ctx.accounts.xcall_authority.key(),
        ctx.program_id,
        &from,
        &data,
    )?;

    match delivery {
        Delivery::Echo => msg!("Ignoring echo from {}", from),
        Delivery::Message => msg!("Message received"),
        Delivery::Rollback => msg!("Rollback message received"),
    }
    emit_all(delivery.events(&from, &data));
    Ok(())
}

#[derive(Accounts)]
pub struct HandleCallMessage<'info> {
    #[account(
        seeds = [STATE_SEED],
        bump = state.bump
    )]
    pub state: Account<'info, HelloWorldState>,

    /// Gateway authority PDA, checked against the stored gateway
    pub xcall_authority: Signer<'info>,
}
