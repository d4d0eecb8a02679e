use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};

use crate::constants::*;
use crate::errors::XCallDappError;
use crate::network_address::NetworkAddress;

/// Identifier the gateway allocates for a dispatched call message
pub type RequestId = u128;

/// Transient call message, never persisted by the dApp
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutboundRequest {
    pub payload: Vec<u8>,

    /// Delivered back to the dApp if the remote leg fails. `None` means the
    /// gateway never sends a rollback for this request.
    pub rollback: Option<Vec<u8>>,

    /// Lamports forwarded to the gateway
    pub value: u64,
}

impl OutboundRequest {
    pub fn new(payload: Vec<u8>, rollback: Option<Vec<u8>>, value: u64) -> Self {
        Self {
            payload,
            rollback,
            value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(!self.payload.is_empty(), XCallDappError::EmptyPayload);
        require!(
            self.payload.len() <= MAX_PAYLOAD_SIZE,
            XCallDappError::PayloadTooLarge
        );
        if let Some(rollback) = &self.rollback {
            require!(
                rollback.len() <= MAX_ROLLBACK_SIZE,
                XCallDappError::RollbackTooLarge
            );
        }
        Ok(())
    }
}

/// The two gateway operations a dApp consumes
pub trait CallService {
    fn send_call_message(
        &mut self,
        to: &NetworkAddress,
        request: &OutboundRequest,
    ) -> Result<RequestId>;

    /// Network address of the gateway itself, `network_id/gateway`
    fn network_address(&mut self) -> Result<NetworkAddress>;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Debug)]
pub struct SendCallMessageArgs {
    pub to: String,
    pub data: Vec<u8>,
    pub rollback: Option<Vec<u8>>,
    pub value: u64,
}

/// Anchor instruction discriminator, first 8 bytes of `sha256("global:<name>")`
pub fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

pub fn instruction_data<T: AnchorSerialize>(name: &str, args: &T) -> Result<Vec<u8>> {
    let mut data = sighash(name).to_vec();
    args.serialize(&mut data)
        .map_err(|_| ErrorCode::InstructionDidNotSerialize)?;
    Ok(data)
}

/// Gateway client that reaches xCall through CPI
///
/// The dApp ledger PDA signs as the sender; `accounts` are forwarded as-is
/// after it (usually the instruction's `remaining_accounts`).
pub struct XCallCpi<'a, 'info> {
    program: AccountInfo<'info>,
    sender: AccountInfo<'info>,
    sender_seeds: &'a [&'a [u8]],
    accounts: &'a [AccountInfo<'info>],
}

impl<'a, 'info> XCallCpi<'a, 'info> {
    pub fn new(
        program: AccountInfo<'info>,
        sender: AccountInfo<'info>,
        sender_seeds: &'a [&'a [u8]],
        accounts: &'a [AccountInfo<'info>],
    ) -> Self {
        Self {
            program,
            sender,
            sender_seeds,
            accounts,
        }
    }

    fn invoke(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        let mut metas = Vec::with_capacity(self.accounts.len() + 1);
        metas.push(AccountMeta::new_readonly(*self.sender.key, true));
        for account in self.accounts {
            metas.push(if account.is_writable {
                AccountMeta::new(*account.key, account.is_signer)
            } else {
                AccountMeta::new_readonly(*account.key, account.is_signer)
            });
        }

        let instruction = Instruction {
            program_id: *self.program.key,
            accounts: metas,
            data,
        };

        let mut infos = Vec::with_capacity(self.accounts.len() + 2);
        infos.push(self.sender.clone());
        infos.extend_from_slice(self.accounts);
        infos.push(self.program.clone());
        invoke_signed(&instruction, &infos, &[self.sender_seeds])?;

        gateway_return_data(self.program.key, get_return_data())
    }
}

/// Accepts return data only when the gateway itself wrote it
pub fn gateway_return_data(
    gateway: &Pubkey,
    returned: Option<(Pubkey, Vec<u8>)>,
) -> Result<Vec<u8>> {
    let (program_id, data) = returned.ok_or(XCallDappError::MissingReturnData)?;
    require_keys_eq!(program_id, *gateway, XCallDappError::GatewayMismatch);
    Ok(data)
}

pub fn decode_request_id(returned: &[u8]) -> Result<RequestId> {
    RequestId::try_from_slice(returned).map_err(|_| error!(XCallDappError::InvalidReturnData))
}

pub fn decode_network_address(returned: &[u8]) -> Result<NetworkAddress> {
    let raw = String::try_from_slice(returned)
        .map_err(|_| error!(XCallDappError::InvalidReturnData))?;
    NetworkAddress::parse(raw)
}

impl CallService for XCallCpi<'_, '_> {
    fn send_call_message(
        &mut self,
        to: &NetworkAddress,
        request: &OutboundRequest,
    ) -> Result<RequestId> {
        let args = SendCallMessageArgs {
            to: to.to_string(),
            data: request.payload.clone(),
            rollback: request.rollback.clone(),
            value: request.value,
        };
        let returned = self.invoke(instruction_data(SEND_CALL_MESSAGE_IX, &args)?)?;
        decode_request_id(&returned)
    }

    fn network_address(&mut self) -> Result<NetworkAddress> {
        let returned = self.invoke(sighash(GET_NETWORK_ADDRESS_IX).to_vec())?;
        decode_network_address(&returned)
    }
}
