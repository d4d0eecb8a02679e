use anchor_lang::prelude::*;
use xcall_dapp::{
    authorize, dispatch, is_echo, resolve_destination, CallService, Inbound, NetworkAddress,
    InboundEvent, OutboundRequest, RequestId, RollbackAction, XCallConfig, XCallDappError,
};

use crate::constants::*;

/// Hello world state PDA
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct HelloWorldState {
    /// Gateway and default destination
    pub config: XCallConfig,

    /// Network id of the gateway. Cached at initialization because the
    /// gateway cannot be called back from inside `handle_call_message`.
    pub network_id: String,

    /// PDA bump seed
    pub bump: u8,
}

/// The only rollback this dApp knows about
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HelloRollback {
    Execute,
}

impl RollbackAction for HelloRollback {
    const ALL: &'static [Self] = &[HelloRollback::Execute];

    fn rollback(self) -> &'static [u8] {
        ROLLBACK
    }
}

/// What an accepted inbound call turned out to be
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Delivery {
    /// Sent by this dApp itself, dropped without events
    Echo,
    Message,
    Rollback,
}

impl Delivery {
    /// Events to emit for the delivery, in emission order
    pub fn events(self, from: &str, data: &[u8]) -> Vec<InboundEvent> {
        match self {
            Delivery::Echo => Vec::new(),
            Delivery::Message => vec![InboundEvent::message(from, data)],
            Delivery::Rollback => vec![
                InboundEvent::message(from, data),
                InboundEvent::rollback(from, data),
            ],
        }
    }
}

impl HelloWorldState {
    pub const SIZE: usize = XCallConfig::SIZE  // config
        + 4 + MAX_NETWORK_ID_SIZE               // network_id
        + 1;                                    // bump

    pub fn initialize<S: CallService + ?Sized>(
        &mut self,
        gateway: &mut S,
        xcall: Pubkey,
        destination: String,
        bump: u8,
    ) -> Result<()> {
        require!(
            !self.config.is_initialized(),
            XCallDappError::AlreadyInitialized
        );

        let gateway_address = gateway.network_address()?;
        let network_id = gateway_address.network_id();
        require!(
            network_id.len() <= MAX_NETWORK_ID_SIZE,
            XCallDappError::InvalidNetworkAddress
        );

        self.config.initialize(xcall, destination)?;
        self.network_id = network_id.to_string();
        self.bump = bump;
        Ok(())
    }

    /// Address other chains see this dApp as, `network_id/program_id`
    pub fn own_address(&self, program_id: &Pubkey) -> Result<NetworkAddress> {
        self.config.ensure_initialized()?;
        NetworkAddress::from_parts(&self.network_id, &program_id.to_string())
    }

    pub fn send_message<S: CallService + ?Sized>(
        &self,
        gateway: &mut S,
        request: &OutboundRequest,
        to: Option<String>,
    ) -> Result<RequestId> {
        let to = resolve_destination(&self.config, to)?;
        dispatch(gateway, &to, request)
    }

    pub fn handle_call_message(
        &self,
        caller: &Pubkey,
        program_id: &Pubkey,
        from: &str,
        data: &[u8],
    ) -> Result<Delivery> {
        let authority = self.config.xcall_authority()?;
        authorize(&authority, caller)?;

        if is_echo(from, &self.own_address(program_id)?) {
            return Ok(Delivery::Echo);
        }

        Ok(match Inbound::<HelloRollback>::classify(data) {
            Inbound::Forward => Delivery::Message,
            Inbound::Rollback(HelloRollback::Execute) => Delivery::Rollback,
        })
    }
}
