//! In-memory gateway for unit tests

use anchor_lang::prelude::*;

use crate::call_service::{CallService, OutboundRequest, RequestId};
use crate::errors::XCallDappError;
use crate::network_address::NetworkAddress;

#[derive(Clone, Debug)]
pub struct SentCall {
    pub id: RequestId,
    pub to: String,
    pub request: OutboundRequest,
}

/// Gateway double that allocates sequential ids and records every call
#[derive(Debug)]
pub struct RecordingCallService {
    pub address: String,
    pub next_id: RequestId,
    pub sent: Vec<SentCall>,
    /// Fail every call as a gateway would that returns nothing
    pub reject: bool,
}

impl RecordingCallService {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            next_id: 1,
            sent: Vec::new(),
            reject: false,
        }
    }
}

impl CallService for RecordingCallService {
    fn send_call_message(
        &mut self,
        to: &NetworkAddress,
        request: &OutboundRequest,
    ) -> Result<RequestId> {
        require!(!self.reject, XCallDappError::MissingReturnData);
        let id = self.next_id;
        self.next_id += 1;
        self.sent.push(SentCall {
            id,
            to: to.to_string(),
            request: request.clone(),
        });
        Ok(id)
    }

    fn network_address(&mut self) -> Result<NetworkAddress> {
        require!(!self.reject, XCallDappError::MissingReturnData);
        NetworkAddress::parse(self.address.clone())
    }
}
