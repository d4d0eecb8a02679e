use anchor_lang::prelude::*;

use crate::errors::XCallDappError;
use crate::network_address::NetworkAddress;

/// An action whose optimistic effect can be undone by a rollback payload
///
/// No two actions share a rollback payload.
pub trait RollbackAction: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn rollback(self) -> &'static [u8];
}

/// An action with a fixed forward payload
pub trait ForwardAction: RollbackAction {
    fn payload(self) -> &'static [u8];
}

/// Classification of inbound data delivered by the gateway
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Inbound<A> {
    /// Not a rollback marker, an ordinary message for this dApp
    Forward,

    /// The remote leg of `A` failed and its local effect must be reverted
    Rollback(A),
}

impl<A: RollbackAction> Inbound<A> {
    pub fn classify(data: &[u8]) -> Self {
        A::ALL
            .iter()
            .copied()
            .find(|action| action.rollback() == data)
            .map_or(Inbound::Forward, Inbound::Rollback)
    }

    /// Classification for dApps that only ever receive rollbacks
    pub fn expect_rollback(data: &[u8]) -> Result<A> {
        match Self::classify(data) {
            Inbound::Rollback(action) => Ok(action),
            Inbound::Forward => err!(XCallDappError::InvalidPayload),
        }
    }
}

/// Decodes a forward payload for dApps sitting on the destination side
pub fn expect_forward<A: ForwardAction>(data: &[u8]) -> Result<A> {
    A::ALL
        .iter()
        .copied()
        .find(|action| action.payload() == data)
        .ok_or_else(|| error!(XCallDappError::InvalidPayload))
}

/// Only the gateway authority may deliver messages
pub fn authorize(expected: &Pubkey, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, *expected, XCallDappError::Unauthorized);
    Ok(())
}

/// True when `from` is this dApp's own address, an echo of its own message
pub fn is_echo(from: &str, own: &NetworkAddress) -> bool {
    from == own.as_str()
}

pub fn log_payload(data: &[u8]) {
    msg!("handleCallMessage payload: {}", String::from_utf8_lossy(data));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Light {
        On,
        Off,
    }

    impl RollbackAction for Light {
        const ALL: &'static [Self] = &[Light::On, Light::Off];

        fn rollback(self) -> &'static [u8] {
            match self {
                Light::On => b"onRollback",
                Light::Off => b"offRollback",
            }
        }
    }

    impl ForwardAction for Light {
        fn payload(self) -> &'static [u8] {
            match self {
                Light::On => b"on",
                Light::Off => b"off",
            }
        }
    }

    #[test]
    fn classifies_each_rollback_marker() {
        assert_eq!(Inbound::<Light>::classify(b"onRollback"), Inbound::Rollback(Light::On));
        assert_eq!(Inbound::<Light>::classify(b"offRollback"), Inbound::Rollback(Light::Off));
    }

    #[test]
    fn anything_else_is_forward() {
        let cases: [&[u8]; 5] = [b"on", b"", b"onrollback", b"onRollback ", b"\xff\xfe"];
        for data in cases {
            assert_eq!(Inbound::<Light>::classify(data), Inbound::Forward);
        }
    }

    #[test]
    fn strict_rollback_rejects_forward_data() {
        assert_eq!(Inbound::<Light>::expect_rollback(b"offRollback").unwrap(), Light::Off);
        assert_eq!(
            Inbound::<Light>::expect_rollback(b"off").unwrap_err(),
            XCallDappError::InvalidPayload.into()
        );
    }

    #[test]
    fn forward_payloads_decode() {
        assert_eq!(expect_forward::<Light>(b"on").unwrap(), Light::On);
        assert_eq!(
            expect_forward::<Light>(b"onRollback").unwrap_err(),
            XCallDappError::InvalidPayload.into()
        );
    }

    #[test]
    fn authorize_requires_exact_key() {
        let gateway = Pubkey::new_unique();
        assert!(authorize(&gateway, &gateway).is_ok());
        assert_eq!(
            authorize(&gateway, &Pubkey::new_unique()).unwrap_err(),
            XCallDappError::Unauthorized.into()
        );
    }

    #[test]
    fn echo_matches_own_address_only() {
        let own = NetworkAddress::parse("solana/Dapp111").unwrap();
        assert!(is_echo("solana/Dapp111", &own));
        assert!(!is_echo("0x2.icon/cx01", &own));
        assert!(!is_echo("btp://solana/Dapp111", &own));
    }
}
