use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod state;

use instructions::*;
use state::Votes;

declare_id!("AYnv5MVv76sdTyrbUg9gSww8MpDFtsArYohR2Z3SG4qW");

/// Cross-chain voting dApp
///
/// Votes are counted locally as soon as they are cast and sent to the
/// destination chain through xCall. A vote whose remote leg fails comes back
/// as its rollback payload and is taken off the tally again.
#[program]
pub mod voting_dapp {
    use super::*;

    /// Store the xCall gateway and the destination dApp, zero the tallies
    pub fn initialize(ctx: Context<Initialize>, destination: String) -> Result<()> {
        instructions::initialize::handler(ctx, destination)
    }

    /// Count a yes vote and send it across
    pub fn vote_yes<'info>(
        ctx: Context<'_, '_, 'info, 'info, CastVote<'info>>,
        value: u64,
    ) -> Result<()> {
        instructions::cast_vote::handler(ctx, state::VoteAction::Yes, value)
    }

    /// Count a no vote and send it across
    pub fn vote_no<'info>(
        ctx: Context<'_, '_, 'info, 'info, CastVote<'info>>,
        value: u64,
    ) -> Result<()> {
        instructions::cast_vote::handler(ctx, state::VoteAction::No, value)
    }

    /// Receive hook invoked by the xCall gateway
    pub fn handle_call_message(
        ctx: Context<HandleCallMessage>,
        from: String,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::handle_call_message::handler(ctx, from, data)
    }

    pub fn get_votes(ctx: Context<ReadLedger>) -> Result<Votes> {
        instructions::queries::get_votes(ctx)
    }

    pub fn get_destination(ctx: Context<ReadLedger>) -> Result<String> {
        instructions::queries::get_destination(ctx)
    }

    pub fn get_xcall_address(ctx: Context<ReadLedger>) -> Result<Pubkey> {
        instructions::queries::get_xcall_address(ctx)
    }
}
