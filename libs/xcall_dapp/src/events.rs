use anchor_lang::prelude::*;

/// Event emitted when the gateway delivers a message
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct MessageReceived {
    pub from: String,
    pub data: Vec<u8>,
}

/// Event emitted when the gateway delivers the rollback of a failed request
#[event]
#[derive(Clone, Debug, PartialEq)]
pub struct RollbackDataReceived {
    pub from: String,
    pub rollback: Vec<u8>,
}

/// Event emitted after a call message was handed to the gateway
#[event]
pub struct CallMessageDispatched {
    pub request_id: u128,
    pub to: String,
}

/// Event produced by an accepted inbound call, emitted by the handler
#[derive(Clone, Debug, PartialEq)]
pub enum InboundEvent {
    Message(MessageReceived),
    Rollback(RollbackDataReceived),
}

impl InboundEvent {
    pub fn message(from: &str, data: &[u8]) -> Self {
        InboundEvent::Message(MessageReceived {
            from: from.to_string(),
            data: data.to_vec(),
        })
    }

    pub fn rollback(from: &str, rollback: &[u8]) -> Self {
        InboundEvent::Rollback(RollbackDataReceived {
            from: from.to_string(),
            rollback: rollback.to_vec(),
        })
    }

    pub fn emit(self) {
        match self {
            InboundEvent::Message(event) => emit!(event),
            InboundEvent::Rollback(event) => emit!(event),
        }
    }
}

pub fn emit_all(events: Vec<InboundEvent>) {
    for event in events {
        event.emit();
    }
}
