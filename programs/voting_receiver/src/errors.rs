use anchor_lang::prelude::*;

// offset keeps codes clear of the shared xcall_dapp errors
#[error_code(offset = 7000)]
pub enum VotingReceiverError {
    #[msg("VotesCapReached")]
    VotesCapReached,

    #[msg("Votes cap must be greater than zero")]
    InvalidVotesCap,
}
