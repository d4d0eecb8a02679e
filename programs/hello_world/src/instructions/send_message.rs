use anchor_lang::prelude::*;
use xcall_dapp::{OutboundRequest, XCallCpi, XCallDappError};

use crate::constants::*;
use crate::state::HelloWorldState;

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SendMessage<'info>>,
    payload: Vec<u8>,
    rollback: Option<Vec<u8>>,
    to: Option<String>,
    value: u64,
) -> Result<()> {
    let bump = [ctx.accounts.state.bump];
    let state_seeds: &[&[u8]] = &[STATE_SEED, &bump];
    let mut gateway = XCallCpi::new(
        ctx.accounts.xcall.to_account_info(),
        ctx.accounts.state.to_account_info(),
        state_seeds,
        ctx.remaining_accounts,
    );

    let request = OutboundRequest::new(payload, rollback, value);
    let request_id = ctx.accounts.state.send_message(&mut gateway, &request, to)?;

    msg!(
        "Message sent: request_id={}, bytes={}, rollback={}",
        request_id,
        request.payload.len(),
        request.rollback.is_some()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct SendMessage<'info> {
    #[account(
        seeds = [STATE_SEED],
        bump = state.bump
    )]
    pub state: Account<'info, HelloWorldState>,

    /// CHECK: must be the gateway stored at initialization
    #[account(
        executable,
        address = state.config.xcall @ XCallDappError::GatewayMismatch
    )]
    pub xcall: UncheckedAccount<'info>,

    #[account(mut)]
    pub sender: Signer<'info>,
}
