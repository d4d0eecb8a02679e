/// Constants for the hello world dApp
pub const STATE_SEED: &[u8] = b"hello_world";

/// Rollback payload the dApp recognises on delivery
pub const ROLLBACK: &[u8] = b"ExecuteRollback";

/// Room for the gateway network id cached at initialization
pub const MAX_NETWORK_ID_SIZE: usize = 64;
