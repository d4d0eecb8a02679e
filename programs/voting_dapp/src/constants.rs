/// Constants for the voting dApp
pub const LEDGER_SEED: &[u8] = b"voting_ledger";

/// Well-known payloads exchanged with the destination chain
pub const PAYLOAD_YES: &[u8] = b"voteYes";
pub const ROLLBACK_YES: &[u8] = b"voteYesRollback";
pub const PAYLOAD_NO: &[u8] = b"voteNo";
pub const ROLLBACK_NO: &[u8] = b"voteNoRollback";
