/// Constants for the voting receiver
pub const TALLY_SEED: &[u8] = b"voting_receiver";
