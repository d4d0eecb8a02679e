use anchor_lang::prelude::*;
use xcall_dapp::{
    authorize, dispatch, CallService, Inbound, InboundEvent, RequestId, XCallConfig,
    XCallDappError,
};

use crate::state::{VoteAction, Votes};

/// Voting ledger PDA
///
/// Tallies are optimistic: a vote counts as soon as it is sent and is taken
/// back when its rollback arrives.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct VotingLedger {
    /// Gateway and destination dApp
    pub config: XCallConfig,

    /// Yes votes cast from this chain
    pub yes: u64,

    /// No votes cast from this chain
    pub no: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl VotingLedger {
    pub const SIZE: usize = XCallConfig::SIZE  // config
        + 8                                     // yes
        + 8                                     // no
        + 1;                                    // bump

    pub fn initialize(&mut self, xcall: Pubkey, destination: String, bump: u8) -> Result<()> {
        self.config.initialize(xcall, destination)?;
        self.yes = 0;
        self.no = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn votes(&self) -> Result<Votes> {
        self.config.ensure_initialized()?;
        Ok(Votes {
            yes: self.yes,
            no: self.no,
        })
    }

    fn counter(&mut self, action: VoteAction) -> &mut u64 {
        match action {
            VoteAction::Yes => &mut self.yes,
            VoteAction::No => &mut self.no,
        }
    }

    /// Counts the vote, then dispatches it with its rollback attached
    ///
    /// The optimistic count is undone if the gateway refuses the message.
    pub fn cast_vote<S: CallService + ?Sized>(
        &mut self,
        gateway: &mut S,
        action: VoteAction,
        value: u64,
    ) -> Result<RequestId> {
        let to = self.config.destination()?;
        let counter = self.counter(action);
        let previous = *counter;
        *counter = previous
            .checked_add(1)
            .ok_or(XCallDappError::CounterOverflow)?;

        dispatch(gateway, &to, &action.request(value)).map_err(|err| {
            *self.counter(action) = previous;
            err
        })
    }

    /// Reverts the vote named by `data`, which must be a rollback payload
    /// delivered by the gateway authority. Returns the single event to emit.
    pub fn handle_call_message(
        &mut self,
        caller: &Pubkey,
        from: &str,
        data: &[u8],
    ) -> Result<(VoteAction, InboundEvent)> {
        let authority = self.config.xcall_authority()?;
        authorize(&authority, caller)?;

        let action = Inbound::<VoteAction>::expect_rollback(data)?;
        let counter = self.counter(action);
        // a rollback without a matching vote is a gateway defect or a replay
        *counter = counter
            .checked_sub(1)
            .ok_or(XCallDappError::RollbackInvariantViolation)?;
        Ok((action, InboundEvent::rollback(from, data)))
    }
}
