//! Shared building blocks for xCall sample dApps.
//!
//! Every dApp in this workspace follows the same shape: an action applies an
//! optimistic update to the program ledger and dispatches a call message
//! through the xCall gateway, and the gateway later calls back into
//! `handle_call_message` with either a forward message or the rollback
//! payload of a failed request.
pub mod call_service;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod errors;
pub mod events;
pub mod inbound;
pub mod network_address;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use call_service::*;
pub use config::*;
pub use dispatcher::*;
pub use errors::XCallDappError;
pub use events::InboundEvent;
pub use inbound::*;
pub use network_address::NetworkAddress;
