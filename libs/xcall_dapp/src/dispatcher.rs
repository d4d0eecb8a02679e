use anchor_lang::prelude::*;

use crate::call_service::{CallService, OutboundRequest, RequestId};
use crate::config::XCallConfig;
use crate::events::CallMessageDispatched;
use crate::network_address::NetworkAddress;

/// Picks the caller-supplied destination, or the configured one
pub fn resolve_destination(config: &XCallConfig, to: Option<String>) -> Result<NetworkAddress> {
    config.ensure_initialized()?;
    match to {
        Some(raw) => NetworkAddress::parse(raw),
        None => config.destination(),
    }
}

/// Hands a call message to the gateway and returns the request id it allocated
///
/// Ledger state is never touched here. Optimistic updates belong to the
/// calling action and must happen before this is called.
pub fn dispatch<S: CallService + ?Sized>(
    service: &mut S,
    to: &NetworkAddress,
    request: &OutboundRequest,
) -> Result<RequestId> {
    request.validate()?;

    let request_id = service.send_call_message(to, request)?;

    emit!(CallMessageDispatched {
        request_id,
        to: to.to_string(),
    });

    msg!("sendCallMessage Response: {}", request_id);
    Ok(request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::XCallDappError;
    use crate::testing::RecordingCallService;

    fn config() -> XCallConfig {
        let mut config = XCallConfig::default();
        config
            .initialize(Pubkey::new_unique(), "0x2.icon/cxdest".to_string())
            .unwrap();
        config
    }

    #[test]
    fn forwards_request_and_returns_gateway_id() {
        let mut gateway = RecordingCallService::new("solana-test/xcall");
        let to = resolve_destination(&config(), None).unwrap();
        let request = OutboundRequest::new(b"hello".to_vec(), Some(b"undo".to_vec()), 42);

        let first = dispatch(&mut gateway, &to, &request).unwrap();
        let second = dispatch(&mut gateway, &to, &request).unwrap();

        assert_eq!(first + 1, second);
        assert_eq!(gateway.sent.len(), 2);
        assert_eq!(gateway.sent[0].to, "0x2.icon/cxdest");
        assert_eq!(gateway.sent[0].request, request);
    }

    #[test]
    fn override_wins_over_configured_destination() {
        let to = resolve_destination(&config(), Some("archway/archway1xyz".to_string())).unwrap();
        assert_eq!(to.as_str(), "archway/archway1xyz");
    }

    #[test]
    fn resolve_requires_initialized_config() {
        let err = resolve_destination(&XCallConfig::default(), Some("a/b".to_string())).unwrap_err();
        assert_eq!(err, XCallDappError::Uninitialized.into());
    }

    #[test]
    fn invalid_request_never_reaches_gateway() {
        let mut gateway = RecordingCallService::new("solana-test/xcall");
        let to = NetworkAddress::parse("0x2.icon/cxdest").unwrap();

        let err = dispatch(&mut gateway, &to, &OutboundRequest::new(Vec::new(), None, 0)).unwrap_err();
        assert_eq!(err, XCallDappError::EmptyPayload.into());
        assert!(gateway.sent.is_empty());
    }

    #[test]
    fn gateway_failure_propagates() {
        let mut gateway = RecordingCallService::new("solana-test/xcall");
        gateway.reject = true;
        let to = NetworkAddress::parse("0x2.icon/cxdest").unwrap();

        let err = dispatch(&mut gateway, &to, &OutboundRequest::new(b"x".to_vec(), None, 0)).unwrap_err();
        assert_eq!(err, XCallDappError::MissingReturnData.into());
    }
}
