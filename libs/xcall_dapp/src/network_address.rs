use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::{BTP_SCHEME, MAX_NETWORK_ADDRESS_SIZE};
use crate::errors::XCallDappError;

/// Cross-chain address of the form `network_id/account`
///
/// The legacy `btp://network_id/account` form is accepted as well. The
/// original string is kept verbatim so it reads back exactly as written.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct NetworkAddress(String);

impl NetworkAddress {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        require!(
            !raw.is_empty() && raw.len() <= MAX_NETWORK_ADDRESS_SIZE,
            XCallDappError::InvalidNetworkAddress
        );

        let body = raw.strip_prefix(BTP_SCHEME).unwrap_or(&raw);
        match body.split_once('/') {
            Some((nid, account)) if !nid.is_empty() && !account.is_empty() => {}
            _ => return err!(XCallDappError::InvalidNetworkAddress),
        }

        Ok(Self(raw))
    }

    /// Builds `network_id/account`
    pub fn from_parts(network_id: &str, account: &str) -> Result<Self> {
        Self::parse(format!("{network_id}/{account}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn network_id(&self) -> &str {
        self.parts().0
    }

    pub fn account(&self) -> &str {
        self.parts().1
    }

    fn parts(&self) -> (&str, &str) {
        let body = self.0.strip_prefix(BTP_SCHEME).unwrap_or(&self.0);
        // validated on construction
        body.split_once('/').unwrap_or((body, ""))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEPOLIA_DAPP: &str = "btp://0xaa36a7.eth2/0x817c542D606ba65b9B158919A77A2Df5AeE2E2EF";

    #[test]
    fn keeps_btp_address_verbatim() {
        let address = NetworkAddress::parse(SEPOLIA_DAPP).unwrap();
        assert_eq!(address.as_str(), SEPOLIA_DAPP);
        assert_eq!(address.network_id(), "0xaa36a7.eth2");
        assert_eq!(address.account(), "0x817c542D606ba65b9B158919A77A2Df5AeE2E2EF");
    }

    #[test]
    fn parses_plain_form() {
        let address = NetworkAddress::parse("0x2.icon/cx1234").unwrap();
        assert_eq!(address.network_id(), "0x2.icon");
        assert_eq!(address.account(), "cx1234");
        assert_eq!(address.to_string(), "0x2.icon/cx1234");
    }

    #[test]
    fn account_may_contain_slashes() {
        let address = NetworkAddress::parse("archway/contract/sub").unwrap();
        assert_eq!(address.network_id(), "archway");
        assert_eq!(address.account(), "contract/sub");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in ["", "no-separator", "/account", "network/", "btp://", "btp:///x"] {
            assert_eq!(
                NetworkAddress::parse(raw).unwrap_err(),
                XCallDappError::InvalidNetworkAddress.into(),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_oversized_address() {
        let raw = format!("nid/{}", "a".repeat(MAX_NETWORK_ADDRESS_SIZE));
        assert!(NetworkAddress::parse(raw).is_err());
    }

    #[test]
    fn builds_from_parts() {
        let address = NetworkAddress::from_parts("solana", "Dapp111").unwrap();
        assert_eq!(address.as_str(), "solana/Dapp111");
    }
}
