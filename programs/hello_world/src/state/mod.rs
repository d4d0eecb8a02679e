pub mod dapp_state;

pub use dapp_state::*;
