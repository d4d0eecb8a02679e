use anchor_lang::prelude::*;

#[error_code]
pub enum XCallDappError {
    #[msg("Unauthorized caller")]
    Unauthorized,

    #[msg("Invalid payload for rollback")]
    InvalidPayload,

    #[msg("dApp is not initialized")]
    Uninitialized,

    #[msg("dApp is already initialized")]
    AlreadyInitialized,

    #[msg("Rollback would take a counter below zero")]
    RollbackInvariantViolation,

    #[msg("Counter overflow")]
    CounterOverflow,

    #[msg("Empty payload")]
    EmptyPayload,

    #[msg("Payload too large")]
    PayloadTooLarge,

    #[msg("Rollback data too large")]
    RollbackTooLarge,

    #[msg("Invalid network address")]
    InvalidNetworkAddress,

    #[msg("Invalid gateway address")]
    InvalidGateway,

    #[msg("Gateway returned no data")]
    MissingReturnData,

    #[msg("Return data does not come from the gateway")]
    GatewayMismatch,

    #[msg("Gateway returned malformed data")]
    InvalidReturnData,
}
