pub mod handle_call_message;
pub mod initialize;
pub mod queries;
pub mod send_message;

pub use handle_call_message::*;
pub use initialize::*;
pub use queries::*;
pub use send_message::*;
