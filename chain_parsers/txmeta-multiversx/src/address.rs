//! Address validation and bech32 conversion.

use bech32::{Bech32, Hrp};
use thiserror::Error;

const ADDRESS_HRP: &str = "erd";
const PUBKEY_LENGTH: usize = 32;

/// Contract addresses live in the reserved address space whose pubkeys
/// start with eight zero bytes.
const SMART_CONTRACT_HEX_PUBKEY_PREFIX: &str = "0000000000000000";

#[derive(Debug, Eq, PartialEq, Error)]
pub enum AddressError {
    #[error("Invalid address hex: {0}")]
    InvalidHex(String),
    #[error("Bech32 encoding failed: {0}")]
    Bech32(String),
}

/// A hex argument is a well-formed address when it decodes to exactly a
/// 32-byte pubkey.
pub fn is_address_valid(pubkey_hex: &str) -> bool {
    hex::decode(pubkey_hex)
        .map(|bytes| bytes.len() == PUBKEY_LENGTH)
        .unwrap_or(false)
}

pub fn bech32_encode(pubkey_hex: &str) -> Result<String, AddressError> {
    let bytes = hex::decode(pubkey_hex).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
    let hrp = Hrp::parse(ADDRESS_HRP).map_err(|e| AddressError::Bech32(e.to_string()))?;
    bech32::encode::<Bech32>(hrp, &bytes).map_err(|e| AddressError::Bech32(e.to_string()))
}

/// Lowercase hex of the address pubkey, or `None` when the input is not a
/// decodable bech32 string. The human-readable prefix is not checked.
pub fn bech32_decode(address: &str) -> Option<String> {
    let (_, bytes) = bech32::decode(address).ok()?;
    Some(hex::encode(bytes))
}

/// Undecodable addresses are treated as "not a contract".
pub fn is_smart_contract(address: &str) -> bool {
    bech32_decode(address)
        .map(|pubkey_hex| pubkey_hex.starts_with(SMART_CONTRACT_HEX_PUBKEY_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALICE_HEX: &str = "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1";
    const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
    const SYSTEM_SC_HEX: &str = "000000000000000000010000000000000000000000000000000000000002ffff";
    const SYSTEM_SC: &str = "erd1qqqqqqqqqqqqqqqpqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzllls8a5w6u";

    #[test]
    fn test_is_address_valid() {
        assert!(is_address_valid(ALICE_HEX));
        assert!(is_address_valid(SYSTEM_SC_HEX));
        // 31 bytes
        assert!(!is_address_valid(&ALICE_HEX[..62]));
        assert!(!is_address_valid("abc"));
        assert!(!is_address_valid("not hex at all"));
    }

    #[test]
    fn test_bech32_round_trip() {
        assert_eq!(bech32_encode(ALICE_HEX).unwrap(), ALICE);
        assert_eq!(bech32_decode(ALICE).unwrap(), ALICE_HEX);

        assert_eq!(bech32_encode(SYSTEM_SC_HEX).unwrap(), SYSTEM_SC);
        assert_eq!(bech32_decode(SYSTEM_SC).unwrap(), SYSTEM_SC_HEX);
    }

    #[test]
    fn test_bech32_encode_rejects_bad_hex() {
        assert!(bech32_encode("0g").is_err());
    }

    #[test]
    fn test_bech32_decode_rejects_garbage() {
        assert_eq!(bech32_decode("not-an-address"), None);
        assert_eq!(bech32_decode(""), None);
        // Valid prefix, corrupted checksum.
        assert_eq!(bech32_decode(&ALICE.replace("ycr6th", "ycr6tt")), None);
    }

    #[test]
    fn test_is_smart_contract() {
        assert!(is_smart_contract(SYSTEM_SC));
        assert!(!is_smart_contract(ALICE));
        assert!(!is_smart_contract("not-an-address"));
    }
}
