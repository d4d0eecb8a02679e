pub mod ledger;
pub mod vote;

pub use ledger::*;
pub use vote::*;
