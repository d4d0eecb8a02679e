use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;
use voting_dapp::state::Votes;

declare_id!("DBZpkbnt8KGZyAKg2s11U1kfGrN3nskhpVxwtTPgoVTz");

/// Destination leg of the cross-chain vote
///
/// Counts `voteYes` / `voteNo` messages delivered by xCall until the cap is
/// reached. A rejected vote makes the gateway return the rollback to the
/// voting dApp on the source chain.
#[program]
pub mod voting_receiver {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, votes_cap: u64) -> Result<()> {
        instructions::initialize::handler(ctx, votes_cap)
    }

    /// Receive hook invoked by the xCall gateway
    pub fn handle_call_message(
        ctx: Context<HandleCallMessage>,
        from: String,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::handle_call_message::handler(ctx, from, data)
    }

    pub fn get_votes(ctx: Context<ReadTally>) -> Result<Votes> {
        instructions::queries::get_votes(ctx)
    }

    pub fn get_votes_cap(ctx: Context<ReadTally>) -> Result<u64> {
        instructions::queries::get_votes_cap(ctx)
    }

    pub fn get_call_service(ctx: Context<ReadTally>) -> Result<Pubkey> {
        instructions::queries::get_call_service(ctx)
    }
}
