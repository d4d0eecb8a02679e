pub mod handle_call_message;
pub mod initialize;
pub mod queries;

pub use handle_call_message::*;
pub use initialize::*;
pub use queries::*;
