use std::fmt;

use anchor_lang::prelude::*;
use xcall_dapp::{ForwardAction, OutboundRequest, RollbackAction};

use crate::constants::*;

/// The two ways to vote, each with its own rollback payload
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteAction {
    Yes,
    No,
}

impl VoteAction {
    /// Call message carrying this vote, with the rollback that undoes it
    pub fn request(self, value: u64) -> OutboundRequest {
        OutboundRequest::new(
            self.payload().to_vec(),
            Some(self.rollback().to_vec()),
            value,
        )
    }
}

impl RollbackAction for VoteAction {
    const ALL: &'static [Self] = &[VoteAction::Yes, VoteAction::No];

    fn rollback(self) -> &'static [u8] {
        match self {
            VoteAction::Yes => ROLLBACK_YES,
            VoteAction::No => ROLLBACK_NO,
        }
    }
}

impl ForwardAction for VoteAction {
    fn payload(self) -> &'static [u8] {
        match self {
            VoteAction::Yes => PAYLOAD_YES,
            VoteAction::No => PAYLOAD_NO,
        }
    }
}

impl fmt::Display for VoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteAction::Yes => f.write_str("yes"),
            VoteAction::No => f.write_str("no"),
        }
    }
}

/// Tally returned by `get_votes`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Votes {
    pub yes: u64,
    pub no: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_requests_carry_matching_rollback() {
        let request = VoteAction::Yes.request(10);
        assert_eq!(request.payload, b"voteYes");
        assert_eq!(request.rollback.as_deref(), Some(&b"voteYesRollback"[..]));
        assert_eq!(request.value, 10);

        let request = VoteAction::No.request(0);
        assert_eq!(request.payload, b"voteNo");
        assert_eq!(request.rollback.as_deref(), Some(&b"voteNoRollback"[..]));
    }

    #[test]
    fn rollback_payloads_are_distinct() {
        assert_ne!(VoteAction::Yes.rollback(), VoteAction::No.rollback());
        for action in VoteAction::ALL {
            assert_ne!(action.payload(), action.rollback());
        }
    }
}
