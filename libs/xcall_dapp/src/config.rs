use anchor_lang::prelude::*;

use crate::constants::{MAX_NETWORK_ADDRESS_SIZE, XCALL_AUTHORITY_SEED};
use crate::errors::XCallDappError;
use crate::network_address::NetworkAddress;

/// Gateway and destination configuration embedded in every dApp ledger
///
/// A zeroed block (default gateway key, empty destination) is the
/// uninitialized state of a freshly allocated account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, PartialEq, Debug)]
pub struct XCallConfig {
    /// xCall gateway program, the only party allowed to deliver messages
    pub xcall: Pubkey,

    /// Counterparty dApp on the destination chain
    pub destination: String,
}

impl XCallConfig {
    pub const SIZE: usize = 32                  // xcall
        + 4 + MAX_NETWORK_ADDRESS_SIZE;         // destination

    pub fn is_initialized(&self) -> bool {
        self.xcall != Pubkey::default() && !self.destination.is_empty()
    }

    /// Writes the configuration once; a second call is rejected
    pub fn initialize(&mut self, xcall: Pubkey, destination: String) -> Result<()> {
        require!(!self.is_initialized(), XCallDappError::AlreadyInitialized);
        require!(xcall != Pubkey::default(), XCallDappError::InvalidGateway);
        let destination = NetworkAddress::parse(destination)?;

        self.xcall = xcall;
        self.destination = destination.into_string();
        Ok(())
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        require!(self.is_initialized(), XCallDappError::Uninitialized);
        Ok(())
    }

    pub fn xcall_address(&self) -> Result<Pubkey> {
        self.ensure_initialized()?;
        Ok(self.xcall)
    }

    pub fn destination(&self) -> Result<NetworkAddress> {
        self.ensure_initialized()?;
        NetworkAddress::parse(self.destination.clone())
    }

    /// Address the gateway signs `handle_call_message` with
    pub fn xcall_authority(&self) -> Result<Pubkey> {
        let xcall = self.xcall_address()?;
        Ok(xcall_authority(&xcall))
    }
}

pub fn xcall_authority(xcall: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[XCALL_AUTHORITY_SEED], xcall).0
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESTINATION: &str = "btp://0xaa36a7.eth2/0x817c542D606ba65b9B158919A77A2Df5AeE2E2EF";

    #[test]
    fn default_config_is_uninitialized() {
        let config = XCallConfig::default();
        assert!(!config.is_initialized());
        assert_eq!(config.xcall_address().unwrap_err(), XCallDappError::Uninitialized.into());
        assert_eq!(config.destination().unwrap_err(), XCallDappError::Uninitialized.into());
    }

    #[test]
    fn destination_reads_back_verbatim() {
        let xcall = Pubkey::new_unique();
        let mut config = XCallConfig::default();
        config.initialize(xcall, DESTINATION.to_string()).unwrap();

        assert_eq!(config.destination().unwrap().as_str(), DESTINATION);
        assert_eq!(config.xcall_address().unwrap(), xcall);
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut config = XCallConfig::default();
        config.initialize(Pubkey::new_unique(), DESTINATION.to_string()).unwrap();
        let before = config.clone();

        let err = config
            .initialize(Pubkey::new_unique(), "0x2.icon/cxother".to_string())
            .unwrap_err();
        assert_eq!(err, XCallDappError::AlreadyInitialized.into());
        assert_eq!(config, before);
    }

    #[test]
    fn invalid_destination_leaves_config_untouched() {
        let mut config = XCallConfig::default();
        assert!(config.initialize(Pubkey::new_unique(), "nowhere".to_string()).is_err());
        assert_eq!(config, XCallConfig::default());
    }

    #[test]
    fn authority_is_derived_from_gateway() {
        let xcall = Pubkey::new_unique();
        let mut config = XCallConfig::default();
        config.initialize(xcall, DESTINATION.to_string()).unwrap();

        let expected = Pubkey::find_program_address(&[XCALL_AUTHORITY_SEED], &xcall).0;
        assert_eq!(config.xcall_authority().unwrap(), expected);
    }
}
