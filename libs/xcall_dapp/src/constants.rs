/// Seed of the PDA the xCall gateway signs inbound calls with
pub const XCALL_AUTHORITY_SEED: &[u8] = b"xcall_authority";

/// Gateway instructions consumed by the dApps
pub const SEND_CALL_MESSAGE_IX: &str = "send_call_message";
pub const GET_NETWORK_ADDRESS_IX: &str = "get_network_address";

/// Maximum sizes for DOS protection
pub const MAX_PAYLOAD_SIZE: usize = 1024;
pub const MAX_ROLLBACK_SIZE: usize = 1024;
pub const MAX_NETWORK_ADDRESS_SIZE: usize = 128;

/// Legacy BTP scheme accepted in front of network addresses
pub const BTP_SCHEME: &str = "btp://";
