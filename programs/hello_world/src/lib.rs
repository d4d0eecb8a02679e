use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fx4Etj13pkgoqpteGikYNQzC7x91mK5syDKEFyGfGmuU");

/// xCall hello world
///
/// Sends arbitrary payloads to a dApp on another chain and reports every
/// message, and every rollback, the gateway delivers back.
#[program]
pub mod hello_world {
    use super::*;

    /// Store the gateway and destination, cache the gateway network id
    pub fn initialize<'info>(
        ctx: Context<'_, '_, 'info, 'info, Initialize<'info>>,
        destination: String,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, destination)
    }

    /// Send `payload` to the configured destination, or to `to` if given
    pub fn send_message<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendMessage<'info>>,
        payload: Vec<u8>,
        rollback: Option<Vec<u8>>,
        to: Option<String>,
        value: u64,
    ) -> Result<()> {
        instructions::send_message::handler(ctx, payload, rollback, to, value)
    }

    /// Receive hook invoked by the xCall gateway
    pub fn handle_call_message(
        ctx: Context<HandleCallMessage>,
        from: String,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::handle_call_message::handler(ctx, from, data)
    }

    pub fn get_destination(ctx: Context<ReadState>) -> Result<String> {
        instructions::queries::get_destination(ctx)
    }

    pub fn get_xcall_address(ctx: Context<ReadState>) -> Result<Pubkey> {
        instructions::queries::get_xcall_address(ctx)
    }
}
