use anchor_lang::prelude::*;
use voting_dapp::state::{VoteAction, Votes};
use xcall_dapp::{authorize, expect_forward, xcall_authority, InboundEvent, XCallDappError};

use crate::errors::VotingReceiverError;

/// Tally PDA on the destination chain
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct VoteTally {
    /// xCall gateway allowed to deliver votes
    pub xcall: Pubkey,

    /// Total number of votes accepted before everything is rejected
    pub votes_cap: u64,

    pub yes: u64,

    pub no: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl VoteTally {
    pub const SIZE: usize = 32  // xcall
        + 8                     // votes_cap
        + 8                     // yes
        + 8                     // no
        + 1;                    // bump

    pub fn is_initialized(&self) -> bool {
        self.xcall != Pubkey::default()
    }

    pub fn initialize(&mut self, xcall: Pubkey, votes_cap: u64, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), XCallDappError::AlreadyInitialized);
        require!(xcall != Pubkey::default(), XCallDappError::InvalidGateway);
        require!(votes_cap > 0, VotingReceiverError::InvalidVotesCap);

        self.xcall = xcall;
        self.votes_cap = votes_cap;
        self.yes = 0;
        self.no = 0;
        self.bump = bump;
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<()> {
        require!(self.is_initialized(), XCallDappError::Uninitialized);
        Ok(())
    }

    pub fn votes(&self) -> Result<Votes> {
        self.ensure_initialized()?;
        Ok(Votes {
            yes: self.yes,
            no: self.no,
        })
    }

    pub fn votes_cap(&self) -> Result<u64> {
        self.ensure_initialized()?;
        Ok(self.votes_cap)
    }

    pub fn call_service(&self) -> Result<Pubkey> {
        self.ensure_initialized()?;
        Ok(self.xcall)
    }

    /// Counts the vote carried by a forward payload
    pub fn handle_call_message(
        &mut self,
        caller: &Pubkey,
        from: &str,
        data: &[u8],
    ) -> Result<(VoteAction, InboundEvent)> {
        self.ensure_initialized()?;
        authorize(&xcall_authority(&self.xcall), caller)?;

        let action = expect_forward::<VoteAction>(data)?;
        let total = self
            .yes
            .checked_add(self.no)
            .ok_or(XCallDappError::CounterOverflow)?;
        require!(total < self.votes_cap, VotingReceiverError::VotesCapReached);

        match action {
            VoteAction::Yes => self.yes += 1,
            VoteAction::No => self.no += 1,
        }
        Ok((action, InboundEvent::message(from, data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xcall_dapp::events::MessageReceived;

    const VOTES_CAP: u64 = 10;
    const FROM: &str = "solana-devnet/AYnv5MVv76sdTyrbUg9gSww8MpDFtsArYohR2Z3SG4qW";

    fn tally() -> (VoteTally, Pubkey) {
        let xcall = Pubkey::new_unique();
        let mut tally = VoteTally::default();
        tally.initialize(xcall, VOTES_CAP, 250).unwrap();
        (tally, xcall_authority(&xcall))
    }

    #[test]
    fn forward_vote_is_counted() {
        let (mut tally, authority) = tally();
        let (action, event) = tally.handle_call_message(&authority, FROM, b"voteYes").unwrap();
        assert_eq!(action, VoteAction::Yes);
        assert_eq!(tally.votes().unwrap(), Votes { yes: 1, no: 0 });
        assert_eq!(
            event,
            InboundEvent::Message(MessageReceived {
                from: FROM.to_string(),
                data: b"voteYes".to_vec(),
            })
        );

        tally.handle_call_message(&authority, FROM, b"voteNo").unwrap();
        assert_eq!(tally.votes().unwrap(), Votes { yes: 1, no: 1 });
    }

    #[test]
    fn cap_rejects_extra_votes() {
        let (mut tally, authority) = tally();
        for _ in 0..VOTES_CAP {
            tally.handle_call_message(&authority, FROM, b"voteYes").unwrap();
        }
        let before = tally.clone();

        let err = tally.handle_call_message(&authority, FROM, b"voteNo").unwrap_err();
        assert_eq!(err, VotingReceiverError::VotesCapReached.into());
        assert_eq!(tally, before);
    }

    #[test]
    fn rollback_payloads_are_not_votes() {
        let (mut tally, authority) = tally();
        let err = tally.handle_call_message(&authority, FROM, b"voteYesRollback").unwrap_err();
        assert_eq!(err, XCallDappError::InvalidPayload.into());
        assert_eq!(tally.votes().unwrap(), Votes::default());
    }

    #[test]
    fn only_gateway_may_deliver() {
        let (mut tally, _) = tally();
        let err = tally.handle_call_message(&Pubkey::new_unique(), FROM, b"voteYes").unwrap_err();
        assert_eq!(err, XCallDappError::Unauthorized.into());
        assert_eq!(tally.votes().unwrap(), Votes::default());
    }

    #[test]
    fn reads_report_configuration() {
        let xcall = Pubkey::new_unique();
        let mut tally = VoteTally::default();
        assert_eq!(tally.votes_cap().unwrap_err(), XCallDappError::Uninitialized.into());

        tally.initialize(xcall, VOTES_CAP, 255).unwrap();
        assert_eq!(tally.votes_cap().unwrap(), VOTES_CAP);
        assert_eq!(tally.call_service().unwrap(), xcall);
    }

    #[test]
    fn zero_cap_is_rejected() {
        let mut tally = VoteTally::default();
        let err = tally.initialize(Pubkey::new_unique(), 0, 255).unwrap_err();
        assert_eq!(err, VotingReceiverError::InvalidVotesCap.into());
        assert!(!tally.is_initialized());
    }

    #[test]
    fn reinitialize_is_rejected() {
        let (mut tally, _) = tally();
        let err = tally.initialize(Pubkey::new_unique(), 3, 1).unwrap_err();
        assert_eq!(err, XCallDappError::AlreadyInitialized.into());
        assert_eq!(tally.votes_cap, VOTES_CAP);
    }
}
